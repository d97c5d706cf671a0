//! Core library for the waypoint travel itinerary planner.
//!
//! A trip request (origin, destination, dates, interests, pace) goes to an
//! itinerary backend over HTTP; the reply is normalized to Markdown and
//! stored per user in SQLite. When the backend is unavailable the
//! [`gateway`] substitutes a deterministic fallback so the user always gets
//! an itinerary.
//!
//! - [`planner`]: the [`TravelPlanner`] facade used by interfaces
//! - [`gateway`]: client for `POST /generate_itinerary`, with fallback
//! - [`backend`]: server side, prompting Ollama
//! - [`normalize`]: raw itinerary text to Markdown
//! - [`prompt`]: prompt construction
//! - [`db`]: accounts and itinerary records in SQLite
//! - [`display`]: Markdown `Display` implementations
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use waypoint_core::{
//!     models::{Pace, TripRequest},
//!     params::Credentials,
//!     TravelPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TravelPlannerBuilder::new()
//!     .with_database_path(Some("waypoint.db"))
//!     .build()
//!     .await?;
//!
//! let session = planner
//!     .login(&Credentials {
//!         email: "traveller@example.com".to_string(),
//!         password: "secret1".to_string(),
//!     })
//!     .await?;
//!
//! let trip = TripRequest {
//!     origin: "Ho Chi Minh City".to_string(),
//!     destination: "Da Nang".to_string(),
//!     start_date: date(2024, 6, 1),
//!     end_date: date(2024, 6, 3),
//!     interests: vec!["Food".to_string(), "Nature".to_string()],
//!     pace: Pace::Normal,
//!     model: "llama3".to_string(),
//! };
//! let generated = planner.generate_itinerary(&session, &trip).await?;
//! println!("{generated}");
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod normalize;
pub mod params;
pub mod planner;
pub mod prompt;

// Re-export commonly used types
pub use config::{BackendConfig, Config, GatewayConfig};
pub use db::Database;
pub use display::{GeneratedItinerary, HistoryEntries, ItineraryDraft, OperationStatus};
pub use error::{GatewayError, Result, WaypointError};
pub use gateway::{fallback_itinerary, GenerationOutcome, ModelGateway};
pub use models::{AuthUser, ItineraryRecord, Pace, Session, TripRequest};
pub use normalize::normalize;
pub use params::{Credentials, ShowItinerary};
pub use planner::{TravelPlanner, TravelPlannerBuilder};
pub use prompt::build_prompt;
