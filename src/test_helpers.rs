//! Shared test utilities for the quizbook test suite.
//!
//! Row construction mirrors what [`crate::workbook::read_sheet`] produces,
//! so assembler tests can feed sheet-shaped data without fixture workbooks.

use crate::types::MatchupItem;
use crate::workbook::Row;
use std::collections::BTreeMap;

/// Build a `Pages` sheet row from explicit field pairs. Fields not named
/// read as empty, same as blank cells.
pub fn page_row(pairs: &[(&'static str, &str)]) -> Row {
    Row::from_pairs(pairs)
}

/// Build a matchup detail index from `(page_num, context, center_text)`
/// triples, preserving triple order within each page.
pub fn detail_index(entries: &[(u32, &str, &str)]) -> BTreeMap<u32, Vec<MatchupItem>> {
    let mut index: BTreeMap<u32, Vec<MatchupItem>> = BTreeMap::new();
    for (page_num, context, center_text) in entries {
        index.entry(*page_num).or_default().push(MatchupItem {
            center_text: center_text.to_string(),
            context: context.to_string(),
        });
    }
    index
}
