//! Data models for trips, itinerary records, and users.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use waypoint_core::models::{Pace, TripRequest};
//!
//! let trip = TripRequest {
//!     origin: "Hanoi".to_string(),
//!     destination: "Hue".to_string(),
//!     start_date: date(2024, 3, 1),
//!     end_date: date(2024, 3, 3),
//!     interests: vec!["Food".to_string()],
//!     pace: Pace::Relaxed,
//!     model: "llama3".to_string(),
//! };
//! assert_eq!(trip.day_count(), 3);
//! ```

pub mod pace;
pub mod record;
pub mod trip;
pub mod user;


pub use pace::Pace;
pub use record::ItineraryRecord;
pub use trip::{TripRequest, DEFAULT_MODEL};
pub use user::{AuthUser, Session};
