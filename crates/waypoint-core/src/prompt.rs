//! Prompt construction for the itinerary model.

use crate::models::TripRequest;

const OUTPUT_SKELETON: &str = "Day 1 - YYYY-MM-DD
Morning: ...
Afternoon: ...
Evening: ...

Day 2 - YYYY-MM-DD
Morning: ...
Afternoon: ...
Evening: ...
";

/// Renders the instruction sent to the model for `trip`.
///
/// The output only depends on the trip fields, so identical requests always
/// produce byte-identical prompts.
pub fn build_prompt(trip: &TripRequest) -> String {
    let interests = trip.interests_text().unwrap_or_else(|| "none".to_string());

    format!(
        "
You are a helpful travel planner.

Trip information:
- Origin city: {origin}
- Destination city: {destination}
- Start date: {start}
- End date: {end}
- Interests: {interests}
- Pace: {pace} (relaxed/normal/tight)

Task:
- Create a short, clear day-by-day itinerary from start date to end date.
- Each day must have Morning, Afternoon, Evening activities.

{rules}

Output format (no extra explanation before or after):

{OUTPUT_SKELETON}",
        origin = trip.origin,
        destination = trip.destination,
        start = trip.start_date,
        end = trip.end_date,
        pace = trip.pace.as_str(),
        rules = day_rules(trip.day_count()),
    )
}

fn day_rules(day_count: i64) -> String {
    if day_count == 1 {
        "
- This is a SINGLE-DAY trip.
- Only output **Day 1**. Do NOT create Day 2 or later.
"
        .to_string()
    } else {
        format!(
            "
- This trip has {day_count} days.
- Output exactly {day_count} days: Day 1, Day 2, ..., Day {day_count}.
"
        )
    }
}
