//! Display implementations for domain models.
//!
//! Output is Markdown so the terminal renderer can style it.

use std::fmt;

use super::datetime::{EpochSeconds, LocalDateTime};
use crate::{
    models::{AuthUser, ItineraryRecord, Pace, Session},
    normalize::normalize,
};

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ItineraryRecord {
    /// Writes the summary block shown above an itinerary:
    /// route and dates, then pace and interests.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**{} → {}** ({} → {})",
            self.origin, self.destination, self.start_date, self.end_date
        )?;
        writeln!(f)?;
        writeln!(f, "- Id: {}", self.timestamp)?;
        writeln!(f, "- Saved: {}", EpochSeconds(self.timestamp))?;
        writeln!(f, "- Pace: `{}`", self.pace)?;
        writeln!(f, "- Interests: {}", self.interests.join(", "))
    }
}

/// A record displays as its summary followed by the normalized itinerary,
/// bounded by the day count of its stored dates.
impl fmt::Display for ItineraryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_summary(f)?;
        let body = normalize(&self.itinerary, self.day_limit());
        if !body.is_empty() {
            writeln!(f)?;
            writeln!(f, "{body}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AuthUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account created for **{}**", self.email)?;
        writeln!(f)?;
        writeln!(f, "- User id: {}", self.local_id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged in as: **{}**", self.email)
    }
}
