//! Trip request model and day arithmetic.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Pace;
use crate::error::{Result, WaypointError};

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "llama3";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Parameters of a trip to plan.
///
/// This is also the JSON body of `POST /generate_itinerary`; dates travel as
/// `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripRequest {
    /// City the trip starts from
    pub origin: String,

    /// City being visited
    pub destination: String,

    /// First day of the trip
    pub start_date: Date,

    /// Last day of the trip (inclusive)
    pub end_date: Date,

    /// Interests in the order they were chosen
    #[serde(default)]
    pub interests: Vec<String>,

    /// Travel pace
    #[serde(default)]
    pub pace: Pace,

    /// Name of the model the backend should use
    #[serde(default = "default_model")]
    pub model: String,
}

impl TripRequest {
    /// Checks that the trip does not end before it starts.
    pub fn validate(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(WaypointError::invalid_input("end_date")
                .with_reason("End date must be after or equal to start date."));
        }
        Ok(())
    }

    /// Number of calendar days covered, both ends included.
    pub fn day_count(&self) -> i64 {
        day_count(self.start_date, self.end_date)
    }

    /// Interests joined for display, or `None` when there are none.
    pub fn interests_text(&self) -> Option<String> {
        if self.interests.is_empty() {
            None
        } else {
            Some(self.interests.join(", "))
        }
    }
}

/// Inclusive day count between two dates. Zero or negative when `end`
/// precedes `start`.
pub fn day_count(start: Date, end: Date) -> i64 {
    i64::from((end - start).get_days()) + 1
}
