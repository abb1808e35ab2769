//! # Quizbook
//!
//! Spreadsheet-to-configuration generator for a printable quiz book site.
//! An editor maintains the book in a spreadsheet workbook; this tool
//! regenerates the TypeScript configuration module the site renders from.
//!
//! # Architecture: One-Pass Batch Pipeline
//!
//! Each run reads the whole workbook, transforms it in memory, and fully
//! replaces the output module — no incremental update, no merging with
//! prior output:
//!
//! ```text
//! 1. Read      page_config.xlsx  →  rows            (sheets → field mappings)
//! 2. Assemble  rows              →  PageBook        (clues, matchups, callouts)
//! 3. Emit      PageBook          →  pageConfig.ts   (compact source module)
//! ```
//!
//! The stages are pure functions between in-memory values, so unit tests can
//! exercise every parsing and defaulting rule without fixture workbooks.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`workbook`] | Stage 1 — opens the `.xlsx`, maps sheet rows onto explicit [`workbook::SheetSchema`] values |
//! | [`clue`] | Parses the free-text items-note cell into a concrete clue sequence |
//! | [`matchup`] | Groups detail-sheet rows into per-page matchup item lists |
//! | [`assemble`] | Stage 2 — merges rows, clues, matchups and callouts into page variants |
//! | [`book`] | The artifact: configured pages plus the lookup/fallback operations |
//! | [`emit`] | Stage 3 — renders the artifact as the TypeScript configuration module |
//! | [`config`] | `quizbook.toml` loading, defaults, and validation |
//! | [`output`] | CLI output formatting — page inventory and run summaries |
//! | [`types`] | Shared data types (`Clue`, `PageVariant`, `Callout`, `Diagnostics`) |
//!
//! # Design Decisions
//!
//! ## Degrade, Don't Fail
//!
//! Only a missing workbook or a missing sheet aborts a run. Everything else —
//! an unparsable items note, an unknown page type, a matchup page with no
//! detail rows — degrades to a safe default and records a warning in an
//! explicit [`types::Diagnostics`] value that the CLI surfaces at the end.
//! The editor always gets a usable module plus a list of what to fix.
//!
//! ## Pages Keyed by Number, Not Position
//!
//! A skipped spreadsheet row leaves a gap in the page-number keyspace instead
//! of shifting later pages. Lookups fill gaps with a deterministic
//! placeholder text page, so the printed book never has a blank or
//! misnumbered page.
//!
//! ## Explicit Sheet Schemas
//!
//! Column meaning in the workbook is positional and the first four rows are
//! template chrome. Both facts live in [`workbook::SheetSchema`] constants
//! rather than being re-derived (or worse, hard-coded) at call sites.
//!
//! ## Generator Shorthand in the Emitted Module
//!
//! Clue sequences that are regular runs (descending years, `#1..#N` ranks)
//! are emitted as `Array.from` expressions rather than 25-line literals.
//! The module stays reviewable in a diff, and the compression is lossless.

pub mod assemble;
pub mod book;
pub mod clue;
pub mod config;
pub mod emit;
pub mod matchup;
pub mod output;
pub mod types;
pub mod workbook;

#[cfg(test)]
pub(crate) mod test_helpers;
