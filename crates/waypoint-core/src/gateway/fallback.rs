//! Synthetic itinerary used when the backend cannot be reached.

use jiff::ToSpan;

use crate::models::TripRequest;

/// Builds a deterministic itinerary from the trip alone: a short header and
/// one `Day N - date` block per calendar day from start to end inclusive.
pub fn fallback_itinerary(trip: &TripRequest) -> String {
    let interests = trip
        .interests_text()
        .unwrap_or_else(|| "no specific interests".to_string());

    let days: Vec<String> = trip
        .start_date
        .series(1.day())
        .take_while(|day| *day <= trip.end_date)
        .enumerate()
        .map(|(i, day)| {
            format!(
                "Day {n} - {day}\n\
                 Morning: Explore local cafes in {destination}.\n\
                 Afternoon: Activity related to {interests}.\n\
                 Evening: {pace} walk in the city center.\n",
                n = i + 1,
                destination = trip.destination,
                pace = trip.pace.capitalized(),
            )
        })
        .collect();

    let header = format!(
        "Trip from {} to {} ({} → {})\nInterests: {interests}\nPace: {}\n\n",
        trip.origin,
        trip.destination,
        trip.start_date,
        trip.end_date,
        trip.pace.as_str(),
    );

    header + &days.join("\n")
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{models::Pace, normalize::normalize};

    fn trip() -> TripRequest {
        TripRequest {
            origin: "A".to_string(),
            destination: "B".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 2),
            interests: vec!["Food".to_string()],
            pace: Pace::Relaxed,
            model: "llama3".to_string(),
        }
    }

    #[test]
    fn test_fallback_exact_text() {
        let expected = "Trip from A to B (2024-01-01 → 2024-01-02)\n\
                        Interests: Food\n\
                        Pace: relaxed\n\
                        \n\
                        Day 1 - 2024-01-01\n\
                        Morning: Explore local cafes in B.\n\
                        Afternoon: Activity related to Food.\n\
                        Evening: Relaxed walk in the city center.\n\
                        \n\
                        Day 2 - 2024-01-02\n\
                        Morning: Explore local cafes in B.\n\
                        Afternoon: Activity related to Food.\n\
                        Evening: Relaxed walk in the city center.\n";
        assert_eq!(fallback_itinerary(&trip()), expected);
    }

    #[test]
    fn test_fallback_without_interests() {
        let mut request = trip();
        request.interests.clear();
        let text = fallback_itinerary(&request);
        assert!(text.contains("Interests: no specific interests"));
        assert!(text.contains("Afternoon: Activity related to no specific interests."));
    }

    #[test]
    fn test_fallback_single_day() {
        let mut request = trip();
        request.end_date = request.start_date;
        let text = fallback_itinerary(&request);
        assert_eq!(text.matches("Day ").count(), 1);
    }

    #[test]
    fn test_fallback_normalizes_cleanly() {
        let request = trip();
        let markdown = normalize(&fallback_itinerary(&request), Some(request.day_count()));
        assert_eq!(
            markdown,
            "### Day 1 - 2024-01-01\n\
             - **Morning:** Explore local cafes in B.\n\
             - **Afternoon:** Activity related to Food.\n\
             - **Evening:** Relaxed walk in the city center.\n\
             \n\
             ### Day 2 - 2024-01-02\n\
             - **Morning:** Explore local cafes in B.\n\
             - **Afternoon:** Activity related to Food.\n\
             - **Evening:** Relaxed walk in the city center."
        );
    }
}
