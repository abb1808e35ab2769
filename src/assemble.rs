//! Page assembly.
//!
//! Stage 2 of the sync pipeline: merges each `Pages` sheet row with its
//! generated clues (list pages) or indexed detail items (matchup pages) and
//! optional callout metadata, producing one [`PageVariant`] per usable row,
//! keyed by page number.
//!
//! Keying by page number — rather than by row position — is what lets a
//! skipped row (missing page number, unknown type) leave a clean gap: lookup
//! of that page later falls through to the synthesized placeholder instead of
//! shifting every subsequent page by one.
//!
//! Nothing in this stage is fatal. Rows that cannot become a page are
//! skipped, degraded cells fall back to defaults, and each degradation lands
//! in the run's [`Diagnostics`].

use crate::clue::parse_items_note;
use crate::types::{Callout, Diagnostics, MatchupItem, PageVariant, Side};
use crate::workbook::Row;
use std::collections::BTreeMap;

/// Icon used when a callout's icon cell is empty.
const DEFAULT_CALLOUT_ICON: &str = "📌";

/// Assemble all page variants from the `Pages` sheet rows.
///
/// `matchups` is the detail-item index from [`crate::matchup::index_by_page`].
pub fn assemble_pages(
    page_rows: &[Row],
    matchups: &BTreeMap<u32, Vec<MatchupItem>>,
    diag: &mut Diagnostics,
) -> BTreeMap<u32, PageVariant> {
    let mut pages = BTreeMap::new();

    for row in page_rows {
        let Some(page_num) = row.page_num() else {
            continue; // spacer or annotation row
        };
        if let Some(variant) = assemble_row(row, page_num, matchups, diag) {
            pages.insert(page_num, variant);
        }
    }

    pages
}

fn assemble_row(
    row: &Row,
    page_num: u32,
    matchups: &BTreeMap<u32, Vec<MatchupItem>>,
    diag: &mut Diagnostics,
) -> Option<PageVariant> {
    let page_type = row.field("page_type").trim().to_lowercase();
    let title = row.field("title").trim().to_string();
    let description = row.field("description").trim().to_string();
    let columns = parse_columns(row.field("columns"));
    let answer_key_url = row.field("answer_key_url").trim().to_string();
    let callout = build_callout(row);

    match page_type.as_str() {
        "list" => {
            let items = parse_items_note(row.field("items_note").trim(), diag);
            Some(PageVariant::List {
                title,
                description,
                items,
                columns,
                answer_key_url,
                callout,
            })
        }
        "matchup" => {
            let items = matchups.get(&page_num).cloned().unwrap_or_default();
            if items.is_empty() {
                diag.warn(format!(
                    "page {page_num} (\"{title}\") is type=matchup but has no rows in the Matchup Items sheet"
                ));
            }
            Some(PageVariant::Matchup {
                title,
                description,
                items,
                columns,
                answer_key_url,
                callout,
            })
        }
        // For text pages the description cell IS the body content.
        "text" => Some(PageVariant::Text {
            content: description,
            answer_key_url,
        }),
        other => {
            diag.warn(format!(
                "page {page_num} (\"{title}\") has unknown type \"{other}\" — skipping"
            ));
            None
        }
    }
}

/// Column count: positive integer or 1.
fn parse_columns(cell: &str) -> u32 {
    cell.trim().parse::<u32>().ok().filter(|&n| n > 0).unwrap_or(1)
}

/// Build the optional callout from a row's callout cells.
///
/// Present iff the note-text cell is non-empty. Unparsable rotations read as
/// 0, the side is `right` unless exactly `left`, and a blank icon cell gets
/// the pin glyph.
fn build_callout(row: &Row) -> Option<Callout> {
    let content = row.field("callout_note").trim();
    if content.is_empty() {
        return None;
    }

    let side = if row.field("callout_side").trim().eq_ignore_ascii_case("left") {
        Side::Left
    } else {
        Side::Right
    };
    let rotation = row
        .field("callout_rotation")
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0);
    let icon = match row.field("callout_icon").trim() {
        "" => DEFAULT_CALLOUT_ICON.to_string(),
        glyph => glyph.to_string(),
    };

    Some(Callout {
        content: content.to_string(),
        side,
        rotation,
        icon,
    })
}
