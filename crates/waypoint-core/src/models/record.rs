//! Stored itinerary records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::trip::day_count;

/// One generated itinerary, owned by a single user and never modified after
/// it is stored.
///
/// Dates and pace are kept exactly as they were persisted so that history can
/// still be shown when they no longer parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryRecord {
    /// Owner of the record
    pub user_id: String,

    /// Epoch seconds at creation; unique per user
    pub timestamp: i64,

    pub origin: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,

    #[serde(default)]
    pub interests: Vec<String>,

    pub pace: String,

    /// Raw itinerary text as returned by the gateway
    pub itinerary: String,
}

impl ItineraryRecord {
    /// Logical address of the record: `users/{uid}/chats/{timestamp}`.
    pub fn record_path(&self) -> String {
        format!("users/{}/chats/{}", self.user_id, self.timestamp)
    }

    /// Day ceiling recomputed from the stored dates, or `None` when either
    /// date fails to parse.
    pub fn day_limit(&self) -> Option<i64> {
        let start = self.start_date.parse::<Date>().ok()?;
        let end = self.end_date.parse::<Date>().ok()?;
        Some(day_count(start, end))
    }
}
