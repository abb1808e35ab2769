//! Matchup detail-row indexing.
//!
//! The `Matchup Items` sheet holds one row per pairing, tied to its page by
//! a page-number foreign key. This module groups those rows into per-page
//! item lists for the assembler, preserving source row order within each
//! page. Rows without a positive numeric page number are discarded silently —
//! the sheet's trailing notes column and stray annotation rows are expected
//! noise, not errors.

use crate::types::MatchupItem;
use crate::workbook::Row;
use std::collections::BTreeMap;

/// Group detail rows by page number.
pub fn index_by_page(rows: &[Row]) -> BTreeMap<u32, Vec<MatchupItem>> {
    let mut index: BTreeMap<u32, Vec<MatchupItem>> = BTreeMap::new();
    for row in rows {
        let Some(page_num) = row.page_num() else {
            continue;
        };
        index.entry(page_num).or_default().push(MatchupItem {
            center_text: row.field("center_text").trim().to_string(),
            context: row.field("context").trim().to_string(),
        });
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_row(page: &str, context: &str, center: &str) -> Row {
        Row::from_pairs(&[
            ("page_num", page),
            ("context", context),
            ("center_text", center),
        ])
    }

    #[test]
    fn groups_rows_by_page_preserving_order() {
        let rows = vec![
            detail_row("6", "Founded in 1976", "Apple"),
            detail_row("9", "Red planet", "Mars"),
            detail_row("6", "Search giant", "Google"),
        ];
        let index = index_by_page(&rows);
        assert_eq!(index.len(), 2);
        let page_six: Vec<&str> = index[&6].iter().map(|i| i.center_text.as_str()).collect();
        assert_eq!(page_six, ["Apple", "Google"]);
        assert_eq!(index[&9][0].context, "Red planet");
    }

    #[test]
    fn discards_rows_without_a_positive_page_number() {
        let rows = vec![
            detail_row("", "orphan", "A"),
            detail_row("0", "zero", "B"),
            detail_row("not-a-number", "junk", "C"),
            detail_row("3", "kept", "D"),
        ];
        let index = index_by_page(&rows);
        assert_eq!(index.len(), 1);
        assert_eq!(index[&3].len(), 1);
    }

    #[test]
    fn trims_item_fields() {
        let rows = vec![detail_row("1", "  padded context  ", "  Label ")];
        let index = index_by_page(&rows);
        assert_eq!(index[&1][0].context, "padded context");
        assert_eq!(index[&1][0].center_text, "Label");
    }

    #[test]
    fn empty_input_yields_empty_index() {
        assert!(index_by_page(&[]).is_empty());
    }
}
