//! CLI output formatting.
//!
//! The sync and check commands print the same page inventory: one header
//! line per configured page (page number, title, variant detail), with
//! secondary context (answer-key URL, callout) on indented lines beneath it.
//! Warnings collected during the run are listed after the inventory.
//!
//! Each piece has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Pages
//! 005 Name That Year (list, 10 clues, 2 columns)
//!     Answer key: https://example.com/page-5-answers
//! 006 Company Match (matchup, 4 pairs, 1 column)
//!     Callout: right 📌 "Try this one with friends!"
//! 012 (text)
//!
//! Generated 3 pages → src/utils/pageConfig.ts
//! 1 warning:
//!   - page 6 ("Company Match") is type=matchup but has no rows in the Matchup Items sheet
//! ```

use crate::book::PageBook;
use crate::types::{Diagnostics, PageVariant, Side};
use std::path::Path;

/// Format a page number as 3-digit zero-padded.
fn format_index(page_num: u32) -> String {
    format!("{page_num:0>3}")
}

/// Header line for one configured page.
fn page_header(page_num: u32, variant: &PageVariant) -> String {
    match variant {
        PageVariant::List { title, items, columns, .. } => format!(
            "{} {} (list, {} {}, {} {})",
            format_index(page_num),
            title,
            items.len(),
            plural(items.len(), "clue"),
            columns,
            plural(*columns as usize, "column"),
        ),
        PageVariant::Matchup { title, items, columns, .. } => format!(
            "{} {} (matchup, {} {}, {} {})",
            format_index(page_num),
            title,
            items.len(),
            plural(items.len(), "pair"),
            columns,
            plural(*columns as usize, "column"),
        ),
        // Text pages have no title — the tag is the identity.
        PageVariant::Text { .. } => format!("{} (text)", format_index(page_num)),
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Format the configured-page inventory.
pub fn format_page_inventory(book: &PageBook) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    for (page_num, variant) in book.pages() {
        lines.push(page_header(*page_num, variant));

        let url = variant.answer_key_url();
        if !url.is_empty() {
            lines.push(format!("    Answer key: {url}"));
        }

        let callout = match variant {
            PageVariant::List { callout, .. } | PageVariant::Matchup { callout, .. } => callout,
            PageVariant::Text { .. } => &None,
        };
        if let Some(callout) = callout {
            let side = match callout.side {
                Side::Left => "left",
                Side::Right => "right",
            };
            lines.push(format!(
                "    Callout: {side} {} \"{}\"",
                callout.icon, callout.content
            ));
        }
    }

    lines
}

/// Format the end-of-run summary: page count, destination, warnings.
///
/// `out` is `None` for check runs, which write nothing.
pub fn format_run_summary(
    book: &PageBook,
    diag: &Diagnostics,
    out: Option<&Path>,
) -> Vec<String> {
    let count = book.configured_count();
    let mut lines = vec![match out {
        Some(path) => format!(
            "Generated {count} {} → {}",
            plural(count, "page"),
            path.display()
        ),
        None => format!("Checked {count} {}", plural(count, "page")),
    }];

    if !diag.is_empty() {
        lines.push(format!(
            "{} {}:",
            diag.len(),
            plural(diag.len(), "warning")
        ));
        for warning in diag.warnings() {
            lines.push(format!("  - {warning}"));
        }
    }

    lines
}

/// Print the inventory and summary for a sync or check run.
pub fn print_run_output(book: &PageBook, diag: &Diagnostics, out: Option<&Path>) {
    for line in format_page_inventory(book) {
        println!("{line}");
    }
    println!();
    for line in format_run_summary(book, diag, out) {
        println!("{line}");
    }
}
