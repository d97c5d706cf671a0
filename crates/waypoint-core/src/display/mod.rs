//! Display formatting for records and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation results get newtype wrappers. All output is Markdown, which
//! the CLI renders with its terminal skin.
//!
//! - [`collections`]: [`HistoryEntries`]
//! - [`results`]: [`ItineraryDraft`], [`GeneratedItinerary`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: timestamp formatting

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::HistoryEntries;
pub use datetime::{EpochSeconds, LocalDateTime};
pub use results::{GeneratedItinerary, ItineraryDraft};
pub use status::OperationStatus;
