//! Builder for creating and configuring TravelPlanner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::TravelPlanner;
use crate::{
    config::GatewayConfig,
    db::Database,
    error::{Result, WaypointError},
    gateway::ModelGateway,
};

/// Builder for creating and configuring TravelPlanner instances.
#[derive(Debug, Clone, Default)]
pub struct TravelPlannerBuilder {
    database_path: Option<PathBuf>,
    gateway: GatewayConfig,
}

impl TravelPlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the backend URL, timeout and default model used for generation.
    pub fn with_gateway_config(mut self, config: GatewayConfig) -> Self {
        self.gateway = config;
        self
    }

    /// Builds the configured planner, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::FileSystem` if the database directory cannot
    /// be created, `WaypointError::Database` if schema setup fails and
    /// `WaypointError::Configuration` if the HTTP client cannot be built.
    pub async fn build(self) -> Result<TravelPlanner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WaypointError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .map_err(WaypointError::join)??;

        let gateway =
            ModelGateway::new(&self.gateway).map_err(|e| WaypointError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(TravelPlanner::new(db_path, gateway))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| WaypointError::XdgDirectory(e.to_string()))
    }
}
