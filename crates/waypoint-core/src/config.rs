//! Runtime configuration.
//!
//! Configuration is read from a YAML file, by default
//! `$XDG_CONFIG_HOME/waypoint/config.yaml`. Every field is optional:
//!
//! ```yaml
//! gateway:
//!   backend_url: http://localhost:8000
//!   timeout_secs: 180
//!   model: llama3
//! backend:
//!   ollama_url: http://localhost:11434/api/generate
//!   num_predict: 350
//!   timeout_secs: 180
//!   bind: 127.0.0.1:8000
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WaypointError},
    models::DEFAULT_MODEL,
};

/// Upper bound on a single itinerary request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub backend: BackendConfig,
}

/// Settings for the client side of `POST /generate_itinerary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the itinerary backend
    pub backend_url: String,
    pub timeout_secs: u64,
    /// Model requested when the user does not pick one
    pub model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Settings for the itinerary backend and its Ollama upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    /// Full URL of Ollama's generate endpoint
    pub ollama_url: String,
    /// Token cap passed as `options.num_predict`
    pub num_predict: u32,
    pub timeout_secs: u64,
    /// Listen address for `wp serve`
    pub bind: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            ollama_url: "http://localhost:11434/api/generate".to_string(),
            num_predict: 350,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Loads configuration from `path`, or from the XDG default location when
    /// `path` is `None`. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| WaypointError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        Self::from_yaml(&contents).map_err(|e| WaypointError::Configuration {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint").find_config_file("config.yaml")
    }
}
