//! Field-extraction heuristics.
//!
//! Given text that passed relevance classification, these heuristics derive a
//! structured [`IncidentRecord`]. All extraction is single-pass,
//! first-match-wins: only the leftmost occurrence of each pattern is used and
//! later, possibly more specific, matches are intentionally ignored. Each
//! field falls back independently (empty string / zero / truncated text), so
//! [`extract_record`] is total and never fails.
//!
//! The individual heuristics are public so they can be tested and swapped out
//! in isolation (e.g. for an NLP model) without touching the coordinator.

use crate::types::IncidentRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Description fallback length when no sentence anchor matches.
const DESCRIPTION_FALLBACK_CHARS: usize = 500;

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}\b",
    )
    .expect("date pattern is valid")
});

static VICTIM_COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:people|individuals|persons|victims|killed|dead|fatally shot|injured)")
        .expect("victim count pattern is valid")
});

static LOCATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"in\s+((?:[A-Z][a-z]+\s*)+(?:,\s*[A-Z]{2})?)").expect("location pattern is valid"));

// `.` does not cross line boundaries, so a newline terminates the sentence
// just like a period does.
static DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:mass\s+shooting|shooting|incident).*?(?:\.|\n)").expect("description pattern is valid"));

/// Extract the first "Month D, YYYY" date substring, or empty.
///
/// The date is kept as free text; no normalization to a calendar type.
pub fn extract_date(text: &str) -> String {
    DATE_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Extract the victim count from the first count-like phrase, or 0.
///
/// Matches `<integer> people|individuals|persons|victims|killed|dead|fatally
/// shot|injured`. First match wins: "4 critically injured, 12 dead" yields 4,
/// not 12. This is a known precision limitation preserved from the original
/// heuristic.
///
/// A digit run that does not fit in `u32` is logged and treated as
/// undetermined rather than silently wrapped.
pub fn extract_victim_count(text: &str) -> u32 {
    let Some(captures) = VICTIM_COUNT_PATTERN.captures(text) else {
        return 0;
    };

    let digits = &captures[1];
    match digits.parse::<u32>() {
        Ok(count) => count,
        Err(e) => {
            warn!(digits, error = %e, "victim count out of range, treating as undetermined");
            0
        }
    }
}

/// Extract the first `in <Title-Case phrase>[, XY]` location, or empty.
///
/// The captured phrase is one or more consecutive capitalized words,
/// optionally suffixed with a two-uppercase-letter region code. Trailing
/// whitespace picked up by the phrase pattern is trimmed.
pub fn extract_location(text: &str) -> String {
    LOCATION_PATTERN
        .captures(text)
        .map(|captures| captures[1].trim_end().to_string())
        .unwrap_or_default()
}

/// Extract a short incident description.
///
/// Uses the first sentence beginning with "mass shooting", "shooting", or
/// "incident" (case-sensitive anchors) up to and including the next period or
/// newline, verbatim. Falls back to the first 500 characters of the text.
pub fn extract_description(text: &str) -> String {
    if let Some(m) = DESCRIPTION_PATTERN.find(text) {
        return m.as_str().to_string();
    }

    if text.chars().count() <= DESCRIPTION_FALLBACK_CHARS {
        text.to_string()
    } else {
        text.chars().take(DESCRIPTION_FALLBACK_CHARS).collect()
    }
}

/// Build a fully populated [`IncidentRecord`] from recognized text.
///
/// Always succeeds; every field has a fallback. The caller decides retention
/// separately via [`IncidentRecord::is_retainable`].
///
/// # Example
///
/// ```rust
/// use incidex::extract::extract_record;
///
/// let record = extract_record(
///     "A shooting in Springfield, IL on March 3, 2021 left 4 people dead.",
///     "page_001.png",
/// );
/// assert_eq!(record.date, "March 3, 2021");
/// assert_eq!(record.victim_count, 4);
/// assert_eq!(record.location, "Springfield, IL");
/// ```
pub fn extract_record(text: &str, source_id: &str) -> IncidentRecord {
    IncidentRecord {
        date: extract_date(text),
        victim_count: extract_victim_count(text),
        location: extract_location(text),
        description: extract_description(text),
        source: source_id.to_string(),
    }
}
