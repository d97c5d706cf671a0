//! High-level travel planner API.
//!
//! [`TravelPlanner`] coordinates the identity store, the model gateway, the
//! itinerary normalizer and record storage. Every user-scoped operation takes
//! an explicit [`Session`](crate::models::Session); the planner itself holds
//! no login state.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  TravelPlanner  │───▶│  ModelGateway   │───▶│ Itinerary       │
//! │ (auth_ops,      │    │  (HTTP + fall-  │    │ backend         │
//! │  itinerary_ops) │    │   back)         │    └─────────────────┘
//! └────────┬────────┘    └─────────────────┘
//!          │             ┌─────────────────┐
//!          └────────────▶│ Database (db/)  │
//!                        └─────────────────┘
//! ```
//!
//! Database work runs on `spawn_blocking` with a fresh connection per call.
//!
//! # Examples
//!
//! ```rust,no_run
//! use waypoint_core::{params::Credentials, TravelPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TravelPlannerBuilder::new()
//!     .with_database_path(Some("/tmp/waypoint.db"))
//!     .build()
//!     .await?;
//!
//! let credentials = Credentials {
//!     email: "traveller@example.com".to_string(),
//!     password: "secret1".to_string(),
//! };
//! planner.signup(&credentials).await?;
//! let session = planner.login(&credentials).await?;
//! let history = planner.history(&session).await?;
//! println!("{history}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, WaypointError},
    gateway::ModelGateway,
};

pub mod auth_ops;
pub mod builder;
pub mod itinerary_ops;


pub use builder::TravelPlannerBuilder;

/// Main interface for accounts and itineraries.
pub struct TravelPlanner {
    pub(crate) db_path: PathBuf,
    pub(crate) gateway: ModelGateway,
}

impl TravelPlanner {
    pub(crate) fn new(db_path: PathBuf, gateway: ModelGateway) -> Self {
        Self { db_path, gateway }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(WaypointError::join)?
    }
}
