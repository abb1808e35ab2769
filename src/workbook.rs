//! Workbook reading and row extraction.
//!
//! Stage 1 of the quizbook sync pipeline. Opens the `.xlsx` workbook and
//! converts each required sheet into ordered field mappings that the
//! assembler consumes.
//!
//! ## Sheet layout
//!
//! The workbook template reserves the first four rows of every sheet for a
//! banner, a subtitle, a spacer, and the human-readable header. Data starts
//! at row five. That offset is a format contract with the template — it is
//! never auto-detected, and [`SheetSchema::skip_rows`] encodes it explicitly.
//!
//! ```text
//! row 1  ┌ QUIZ BOOK — PAGE CONFIG ┐   (banner)
//! row 2  │ edit me, then run sync  │   (subtitle)
//! row 3  │                         │   (spacer)
//! row 4  │ Page # | Type | Title…  │   (header)
//! row 5  │ 1      | list | Years…  │   ← first data row
//! ```
//!
//! ## Schemas
//!
//! Column meaning is positional. Rather than hard-coding offsets at call
//! sites, each sheet gets an explicit [`SheetSchema`] value ([`PAGES`],
//! [`MATCHUP_ITEMS`]) naming every column in order. Cells beyond a row's
//! last populated column default to the empty string, so downstream code
//! never distinguishes "blank cell" from "short row".

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("could not find workbook at {0} — use --excel <path> to point at it")]
    FileNotFound(PathBuf),
    #[error("workbook has no sheet named \"{0}\"")]
    MissingSheet(String),
    #[error("failed to read workbook: {0}")]
    Xlsx(#[from] calamine::XlsxError),
}

/// Explicit description of one sheet's layout: its name, the ordered column
/// field names, and how many leading template rows to skip.
#[derive(Debug, Clone, Copy)]
pub struct SheetSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub skip_rows: u32,
}

/// The `Pages` sheet: one row per book page.
pub const PAGES: SheetSchema = SheetSchema {
    name: "Pages",
    columns: &[
        "page_num",
        "page_type",
        "title",
        "description",
        "items_note",
        "columns",
        "answer_key_url",
        "callout_note",
        "callout_side",
        "callout_rotation",
        "callout_icon",
    ],
    skip_rows: 4,
};

/// The `Matchup Items` sheet: one row per matchup pairing, keyed to a page.
pub const MATCHUP_ITEMS: SheetSchema = SheetSchema {
    name: "Matchup Items",
    columns: &["page_num", "context", "center_text", "notes"],
    skip_rows: 4,
};

/// One data row as an ordered field mapping, per its sheet's schema.
#[derive(Debug, Clone)]
pub struct Row {
    fields: Vec<(&'static str, String)>,
}

impl Row {
    /// Build a row from explicit field pairs. Used by tests and fixtures;
    /// production rows come from [`read_sheet`].
    pub fn from_pairs(pairs: &[(&'static str, &str)]) -> Self {
        Self {
            fields: pairs.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    /// Look up a field by schema column name. Unknown or absent fields read
    /// as the empty string.
    pub fn field(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// The row's page number, if its `page_num` field holds a positive
    /// integer. Zero, negative, and non-numeric values read as `None`.
    pub fn page_num(&self) -> Option<u32> {
        self.field("page_num")
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
    }
}

/// An opened workbook handle.
pub type Workbook = Xlsx<BufReader<std::fs::File>>;

/// Open the workbook at `path`.
///
/// The existence check runs before calamine so a missing file reports as
/// [`WorkbookError::FileNotFound`] with the path, not as a generic zip error.
pub fn open(path: &Path) -> Result<Workbook, WorkbookError> {
    if !path.exists() {
        return Err(WorkbookError::FileNotFound(path.to_path_buf()));
    }
    Ok(open_workbook(path)?)
}

/// Read one sheet into rows according to its schema.
///
/// Fails with [`WorkbookError::MissingSheet`] if the workbook has no sheet
/// with the schema's name.
pub fn read_sheet(workbook: &mut Workbook, schema: &SheetSchema) -> Result<Vec<Row>, WorkbookError> {
    if !workbook
        .sheet_names()
        .iter()
        .any(|n| n.as_str() == schema.name)
    {
        return Err(WorkbookError::MissingSheet(schema.name.to_string()));
    }
    let range = workbook.worksheet_range(schema.name)?;
    Ok(rows_from_range(&range, schema))
}

/// Map a cell range onto schema rows.
///
/// Pure function over an in-memory range, so tests can exercise the skip and
/// defaulting rules without fixture files. Rows whose absolute sheet index
/// falls inside the template header region are dropped; so are fully empty
/// trailing rows.
pub fn rows_from_range(range: &Range<Data>, schema: &SheetSchema) -> Vec<Row> {
    let first_row = range.start().map(|(r, _)| r).unwrap_or(0);
    let mut rows = Vec::new();

    for (i, cells) in range.rows().enumerate() {
        let abs_row = first_row + i as u32;
        if abs_row < schema.skip_rows {
            continue;
        }

        let fields: Vec<(&'static str, String)> = schema
            .columns
            .iter()
            .enumerate()
            .map(|(col, name)| (*name, cells.get(col).map(cell_text).unwrap_or_default()))
            .collect();

        if fields.iter().all(|(_, v)| v.is_empty()) {
            continue;
        }
        rows.push(Row { fields });
    }

    rows
}

/// Render a cell as the text the spreadsheet author typed.
///
/// Integral floats drop the artificial `.0` that xlsx storage introduces
/// (a page number entered as `5` comes back as `Data::Float(5.0)`).
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}
