//! Parameter structures for waypoint operations.
//!
//! These are shared by every interface (the `wp` CLI, the HTTP backend)
//! without framework-specific derives. Interface layers define their own
//! argument structs and convert into these with `.into()`.
//!
//! ```ignore
//! // In waypoint-cli/src/cli.rs
//! #[derive(Args)]
//! pub struct LoginArgs {
//!     pub email: String,
//!     pub password: String,
//! }
//!
//! impl From<LoginArgs> for Credentials {
//!     fn from(args: LoginArgs) -> Self {
//!         Credentials { email: args.email, password: args.password }
//!     }
//! }
//! ```
//!
//! Trip requests use [`crate::models::TripRequest`] directly, since that type
//! is also the wire body of the backend.

use serde::{Deserialize, Serialize};

/// Email and password for signup or login.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parameters for showing a single stored itinerary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShowItinerary {
    /// Epoch-second timestamp identifying the record
    pub timestamp: i64,
}
