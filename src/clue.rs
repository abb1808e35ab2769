//! Items-note parsing for list pages.
//!
//! The `Pages` sheet describes a list page's clues in prose rather than data:
//!
//! ```text
//! "25 items – clues are years descending from 2024"
//! "10 items – clues are rank numbers (#1, #2 …)"
//! "5 items – clues are whatever the editor felt like"
//! ```
//!
//! This module turns that prose into a concrete clue sequence. It is a
//! best-effort heuristic matcher, not a grammar: a note that fails both
//! recognized patterns degrades to empty-string clues plus a warning, and
//! nothing here ever fails the run. Matching is case-insensitive throughout.
//!
//! Rule order is fixed — the year pattern is checked before the rank
//! pattern — so a note that somehow mentions both produces years.

use crate::types::{Clue, Diagnostics};
use regex::Regex;
use std::sync::LazyLock;

/// Number of clues produced when the note's item count is unparsable.
const FALLBACK_COUNT: usize = 10;

static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(\d+)\s+items").unwrap());
static YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)years\s+descending\s+from\s+(\d{4})").unwrap());
static RANKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)rank\s+numbers?").unwrap());

/// Parse an items-note cell into an ordered clue sequence.
///
/// Returns exactly the declared number of clues (or [`FALLBACK_COUNT`] when
/// the count itself is unparsable). Unrecognized notes yield empty-string
/// clues; every degradation records one warning in `diag`.
pub fn parse_items_note(note: &str, diag: &mut Diagnostics) -> Vec<Clue> {
    let Some(count) = COUNT_RE
        .captures(note)
        .and_then(|c| c[1].parse::<usize>().ok())
    else {
        diag.warn(format!(
            "could not parse item count from \"{note}\" — defaulting to {FALLBACK_COUNT} items with empty clues"
        ));
        return empty_clues(FALLBACK_COUNT);
    };

    if let Some(start) = YEARS_RE
        .captures(note)
        .and_then(|c| c[1].parse::<i64>().ok())
    {
        return descending_years(start, count);
    }

    if RANKS_RE.is_match(note) {
        return rank_labels(count);
    }

    diag.warn(format!(
        "unrecognised clue style in \"{note}\" — items will have empty clues"
    ));
    empty_clues(count)
}

/// `start, start-1, …` for `count` values.
pub fn descending_years(start: i64, count: usize) -> Vec<Clue> {
    (0..count as i64).map(|i| Clue::Number(start - i)).collect()
}

/// `"#1", "#2", …, "#count"`.
pub fn rank_labels(count: usize) -> Vec<Clue> {
    (1..=count).map(|i| Clue::Text(format!("#{i}"))).collect()
}

fn empty_clues(count: usize) -> Vec<Clue> {
    vec![Clue::Text(String::new()); count]
}
