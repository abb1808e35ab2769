//! Shared types used across all pipeline stages.
//!
//! These types flow from the assembler into the configuration artifact and
//! the serializer, and their serde shapes mirror the TypeScript interfaces
//! the emitted module declares (`ListPage`, `MatchupPage`, `TextPage`,
//! `ActionContent`).

use serde::{Deserialize, Serialize};

/// A single quiz prompt value within a list page.
///
/// Clues are either integers (e.g. a year) or short label strings (e.g.
/// `"#7"`). The untagged representation keeps the serialized form identical
/// to the spreadsheet's intent: `2024` stays a number, `"#7"` stays a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Clue {
    Number(i64),
    Text(String),
}

impl Clue {
    /// The integer value, if this clue is numeric.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Clue::Number(n) => Some(*n),
            Clue::Text(_) => None,
        }
    }

    /// The label text, if this clue is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Clue::Number(_) => None,
            Clue::Text(s) => Some(s),
        }
    }
}

/// One matchup pairing: the center label and its surrounding context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupItem {
    pub center_text: String,
    pub context: String,
}

/// Which margin a callout note hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Optional decorative side-note attached to a page.
///
/// Built only when the spreadsheet's note-text cell is non-empty. Field
/// defaulting (rotation 0, side right, pin icon) happens in the assembler,
/// so a constructed `Callout` is always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub content: String,
    pub side: Side,
    pub rotation: f64,
    pub icon: String,
}

/// Assembled configuration for a single book page.
///
/// Exactly one variant per page. `Text` pages reuse the spreadsheet's
/// description cell as their body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageVariant {
    List {
        title: String,
        description: String,
        items: Vec<Clue>,
        columns: u32,
        answer_key_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        callout: Option<Callout>,
    },
    Matchup {
        title: String,
        description: String,
        items: Vec<MatchupItem>,
        columns: u32,
        answer_key_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        callout: Option<Callout>,
    },
    Text {
        content: String,
        answer_key_url: String,
    },
}

impl PageVariant {
    /// The answer-key URL carried by any variant (possibly empty).
    pub fn answer_key_url(&self) -> &str {
        match self {
            PageVariant::List { answer_key_url, .. }
            | PageVariant::Matchup { answer_key_url, .. }
            | PageVariant::Text { answer_key_url, .. } => answer_key_url,
        }
    }

    /// Lower-case tag name, matching the spreadsheet's type column.
    pub fn tag(&self) -> &'static str {
        match self {
            PageVariant::List { .. } => "list",
            PageVariant::Matchup { .. } => "matchup",
            PageVariant::Text { .. } => "text",
        }
    }
}

/// Accumulated non-fatal findings from a generator run.
///
/// The note parser and the assembler degrade to safe defaults instead of
/// failing; each degradation is recorded here and surfaced by the CLI at the
/// end of the run. An explicit value rather than a process-wide counter, so
/// tests can assert on exactly what was warned about.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}
