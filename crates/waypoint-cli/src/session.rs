//! Login session persisted between invocations.

use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use anyhow::{anyhow, Context, Result};
use log::debug;
use waypoint_core::models::Session;

/// JSON file holding the logged-in user's [`Session`].
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Uses `path`, or `$XDG_STATE_HOME/waypoint/session.json` when `None`.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => xdg::BaseDirectories::with_prefix("waypoint")
                .place_state_file("session.json")
                .context("Failed to resolve session file location")?,
        };
        Ok(Self { path })
    }

    /// Returns the stored session, or `None` when nobody is logged in.
    pub fn load(&self) -> Result<Option<Session>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read session file {}", self.path.display())
                })
            }
        };
        let session = serde_json::from_str(&contents)
            .with_context(|| format!("Corrupt session file {}", self.path.display()))?;
        Ok(Some(session))
    }

    /// Returns the stored session or fails with "Not logged in".
    pub fn require(&self) -> Result<Session> {
        self.load()?
            .ok_or_else(|| anyhow!("Not logged in. Run `wp login <email> <password>` first."))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session file {}", self.path.display()))?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Removes the session file. Returns whether a session existed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove session file {}", self.path.display())
            }),
        }
    }
}
