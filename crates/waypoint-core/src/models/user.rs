//! Accounts and login sessions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// An account in the identity store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    /// Opaque user id
    #[serde(rename = "localId")]
    pub local_id: String,

    pub email: String,

    pub created_at: Timestamp,
}

/// Identity of the logged-in user, handed to every user-scoped operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(rename = "localId")]
    pub local_id: String,

    pub email: String,
}

impl From<AuthUser> for Session {
    fn from(user: AuthUser) -> Self {
        Self {
            local_id: user.local_id,
            email: user.email,
        }
    }
}
