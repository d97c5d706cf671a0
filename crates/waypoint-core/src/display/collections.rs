//! Collection wrapper types for displaying groups of records.

use std::fmt;

use crate::models::ItineraryRecord;

/// A user's itinerary history, most recent first.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::display::HistoryEntries;
///
/// assert_eq!(HistoryEntries(vec![]).to_string(), "No history yet.\n");
/// ```
pub struct HistoryEntries(pub Vec<ItineraryRecord>);

impl HistoryEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for HistoryEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No history yet.");
        }

        for (i, record) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "---")?;
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: i64, destination: &str) -> ItineraryRecord {
        ItineraryRecord {
            user_id: "u1".to_string(),
            timestamp,
            origin: "Hanoi".to_string(),
            destination: destination.to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-01".to_string(),
            interests: vec![],
            pace: "tight".to_string(),
            itinerary: "Day 1\nMorning: Walk".to_string(),
        }
    }

    #[test]
    fn test_history_keeps_order_and_separates_entries() {
        let history = HistoryEntries(vec![record(20, "Hue"), record(10, "Hoi An")]);
        let output = history.to_string();

        let hue = output.find("Hanoi → Hue").unwrap();
        let hoi_an = output.find("Hanoi → Hoi An").unwrap();
        assert!(hue < hoi_an);
        assert_eq!(output.matches("\n---\n").count(), 1);
        assert_eq!(history.len(), 2);
    }
}
