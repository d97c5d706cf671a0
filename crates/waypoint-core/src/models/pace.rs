//! Travel pace enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of travel paces.
///
/// The pace is passed through to the model prompt and the fallback
/// itinerary; nothing enforces it algorithmically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// Few activities, plenty of downtime
    Relaxed,

    /// A typical sightseeing day
    #[default]
    Normal,

    /// Packed schedule
    Tight,
}

impl FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" => Ok(Pace::Relaxed),
            "normal" => Ok(Pace::Normal),
            "tight" => Ok(Pace::Tight),
            _ => Err(format!("Invalid pace: {s}")),
        }
    }
}

impl Pace {
    /// Convert to the lowercase wire and database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Normal => "normal",
            Pace::Tight => "tight",
        }
    }

    /// Capitalized label, e.g. `Relaxed`.
    pub fn capitalized(&self) -> &'static str {
        match self {
            Pace::Relaxed => "Relaxed",
            Pace::Normal => "Normal",
            Pace::Tight => "Tight",
        }
    }
}
