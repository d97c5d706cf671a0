//! Itinerary text to Markdown normalization.
//!
//! Model output loosely follows a `Day N / Morning / Afternoon / Evening`
//! layout but often carries a chatty preamble, runs several sections together
//! on one line, or keeps going past the requested number of days. [`normalize`]
//! turns that text into a canonical Markdown document:
//!
//! ```text
//! ### Day 1 - 2024-01-01
//! - **Morning:** Walk
//! - **Afternoon:** Eat
//! - **Evening:** Sleep
//! ```
//!
//! Days are renumbered 1, 2, 3, … in the order they are encountered, whatever
//! numbers the model used.

use std::sync::LazyLock;

use regex::Regex;

/// Literal markers that always start a new line.
const SECTION_TOKENS: [&str; 4] = ["Day ", "Morning:", "Afternoon:", "Evening:"];

static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Day\s+\d+").expect("day marker pattern is valid"));

static DAY_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^day\s+\d+(.*)$").expect("day heading pattern is valid"));

/// Every line boundary other than `\n`: CRLF, lone CR, vertical tab, form
/// feed, the file/group/record separators, NEL, and the Unicode line and
/// paragraph separators.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("line break pattern is valid")
});

/// Time-of-day sections recognised inside a day block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Morning,
    Afternoon,
    Evening,
}

impl Section {
    const ALL: [Section; 3] = [Section::Morning, Section::Afternoon, Section::Evening];

    fn prefix(self) -> &'static str {
        match self {
            Section::Morning => "morning:",
            Section::Afternoon => "afternoon:",
            Section::Evening => "evening:",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Section::Morning => "Morning",
            Section::Afternoon => "Afternoon",
            Section::Evening => "Evening",
        }
    }
}

/// Converts raw itinerary text to Markdown, keeping at most `day_limit` days.
///
/// A `day_limit` of `None`, zero, or a negative number disables truncation.
/// Anything before the first `Day` line is dropped, so text without any day
/// marker normalizes to an empty string.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::normalize::normalize;
///
/// let raw = "Sure! Day 3 - Beach\nMorning: Swim Evening: Dinner\nDay 4 - Hills";
/// assert_eq!(
///     normalize(raw, Some(1)),
///     "### Day 1 - Beach\n- **Morning:** Swim\n- **Evening:** Dinner"
/// );
/// ```
pub fn normalize(raw: &str, day_limit: Option<i64>) -> String {
    let text = truncate_days(raw, day_limit);
    let text = split_sections(&LINE_BREAK.replace_all(text, "\n"));

    let mut lines: Vec<String> = Vec::new();
    let mut day_index = 0u32;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if strip_prefix_ignore_case(line, "day ").is_some() {
            day_index += 1;
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(day_title(line, day_index));
            continue;
        }

        // Preamble before the first day is model chatter.
        if day_index == 0 {
            continue;
        }

        let bullet = Section::ALL.iter().find_map(|section| {
            strip_prefix_ignore_case(line, section.prefix())
                .map(|content| format!("- **{}:** {}", section.label(), content.trim_start()))
        });
        lines.push(bullet.unwrap_or_else(|| line.to_string()));
    }

    lines.join("\n")
}

/// Cuts `raw` down to the span between the first day marker and the marker
/// that would start day `day_limit + 1`.
fn truncate_days(raw: &str, day_limit: Option<i64>) -> &str {
    let Some(limit) = day_limit.filter(|n| *n >= 1) else {
        return raw;
    };

    let starts: Vec<usize> = DAY_MARKER.find_iter(raw).map(|m| m.start()).collect();
    let Some(&first) = starts.first() else {
        return raw;
    };

    match usize::try_from(limit).ok().and_then(|n| starts.get(n)) {
        Some(&end) => &raw[first..end],
        None => &raw[first..],
    }
}

/// Forces a line break before every section token so that sections the model
/// ran together end up on separate lines.
fn split_sections(text: &str) -> String {
    SECTION_TOKENS
        .iter()
        .fold(text.to_string(), |acc, token| {
            acc.replace(token, &format!("\n{token}"))
        })
}

fn day_title(line: &str, index: u32) -> String {
    let suffix = DAY_HEADING
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_default();
    let suffix = suffix.strip_prefix('-').map_or(suffix, str::trim);

    if suffix.is_empty() {
        format!("### Day {index}")
    } else {
        format!("### Day {index} - {suffix}")
    }
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}
