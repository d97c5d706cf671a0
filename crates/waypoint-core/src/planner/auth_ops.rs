//! Signup and login.

use log::info;

use super::TravelPlanner;
use crate::{
    error::Result,
    models::{AuthUser, Session},
    params::Credentials,
};

impl TravelPlanner {
    /// Creates an account.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a malformed email or short password,
    /// `Authentication` when the email is already registered.
    pub async fn signup(&self, credentials: &Credentials) -> Result<AuthUser> {
        let Credentials { email, password } = credentials.clone();
        let user = self
            .with_database(move |db| db.create_user(&email, &password))
            .await?;
        info!("Created account {}", user.local_id);
        Ok(user)
    }

    /// Verifies credentials and returns the session to use for
    /// user-scoped operations.
    ///
    /// Unknown emails and wrong passwords fail with the same
    /// `Authentication` error.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let Credentials { email, password } = credentials.clone();
        let user = self
            .with_database(move |db| db.verify_user(&email, &password))
            .await?;
        info!("Logged in {}", user.local_id);
        Ok(user.into())
    }
}
