//! Operation result types.

use std::fmt;

use crate::models::{ItineraryRecord, TripRequest};

/// A freshly generated itinerary that has not been stored yet.
#[derive(Debug, Clone)]
pub struct ItineraryDraft {
    pub trip: TripRequest,
    /// Text as returned by the gateway, stored verbatim
    pub raw: String,
    /// Normalized Markdown bounded by the trip's day count
    pub formatted: String,
}

/// Outcome of generating and storing an itinerary.
#[derive(Debug, Clone)]
pub struct GeneratedItinerary {
    pub record: ItineraryRecord,
    pub formatted: String,
}

fn fmt_itinerary(
    f: &mut fmt::Formatter<'_>,
    origin: &str,
    destination: &str,
    dates: [&dyn fmt::Display; 2],
    formatted: &str,
) -> fmt::Result {
    let [start, end] = dates;
    writeln!(f, "# {origin} → {destination} ({start} → {end})")?;
    writeln!(f)?;
    if formatted.is_empty() {
        writeln!(f, "The model returned an empty itinerary.")
    } else {
        writeln!(f, "{formatted}")
    }
}

impl fmt::Display for ItineraryDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_itinerary(
            f,
            &self.trip.origin,
            &self.trip.destination,
            [&self.trip.start_date, &self.trip.end_date],
            &self.formatted,
        )
    }
}

impl fmt::Display for GeneratedItinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_itinerary(
            f,
            &self.record.origin,
            &self.record.destination,
            [&self.record.start_date, &self.record.end_date],
            &self.formatted,
        )?;
        writeln!(f)?;
        writeln!(f, "Saved to history as {}.", self.record.timestamp)
    }
}
