//! End-to-end pipeline tests: sheet-shaped rows in, emitted module out.
//!
//! Exercises the assembler, the artifact lookups, and the serializer
//! together the way the sync command wires them, using `Row::from_pairs`
//! in place of a fixture workbook.

use quizbook::assemble::assemble_pages;
use quizbook::book::PageBook;
use quizbook::emit::render_module;
use quizbook::matchup::index_by_page;
use quizbook::types::{Clue, Diagnostics, PageVariant};
use quizbook::workbook::Row;
use std::collections::BTreeMap;

const TOTAL_PAGES: u32 = 100;

fn pages_fixture() -> Vec<Row> {
    vec![
        Row::from_pairs(&[
            ("page_num", "5"),
            ("page_type", "list"),
            ("title", "Name That Year"),
            ("description", "Match each clue to its year."),
            ("items_note", "10 items – clues are years descending from 2024"),
            ("columns", "2"),
            ("answer_key_url", "https://example.com/page-5-answers"),
        ]),
        Row::from_pairs(&[
            ("page_num", "6"),
            ("page_type", "matchup"),
            ("title", "Company Match"),
            ("description", "Pair the company with its claim to fame."),
        ]),
        Row::from_pairs(&[
            ("page_num", "7"),
            ("page_type", "banana"),
            ("title", "Mystery Page"),
        ]),
    ]
}

fn run_fixture() -> (PageBook, Diagnostics) {
    let mut diag = Diagnostics::new();
    let pages = assemble_pages(&pages_fixture(), &BTreeMap::new(), &mut diag);
    (PageBook::new(TOTAL_PAGES, pages), diag)
}

#[test]
fn list_page_gets_descending_year_clues() {
    let (book, _) = run_fixture();
    let PageVariant::List { items, .. } = book.page_configuration(5) else {
        panic!("page 5 should be a list");
    };
    let expected: Vec<Clue> = (0..10).map(|i| Clue::Number(2024 - i)).collect();
    assert_eq!(items, expected);
}

#[test]
fn matchup_page_without_detail_rows_is_kept_empty() {
    let (book, _) = run_fixture();
    let PageVariant::Matchup { items, .. } = book.page_configuration(6) else {
        panic!("page 6 should be a matchup");
    };
    assert!(items.is_empty());
}

#[test]
fn unknown_type_row_falls_through_to_placeholder() {
    let (book, _) = run_fixture();
    let PageVariant::Text {
        content,
        answer_key_url,
    } = book.page_configuration(7)
    else {
        panic!("page 7 should be the synthesized placeholder");
    };
    assert!(content.contains("This is page 7 of our book."));
    assert_eq!(answer_key_url, "https://example.com/page-7-answers");
}

#[test]
fn run_accumulates_exactly_two_warnings() {
    let (_, diag) = run_fixture();
    assert_eq!(diag.len(), 2);
    assert!(diag.warnings()[0].contains("no rows in the Matchup Items sheet"));
    assert!(diag.warnings()[1].contains("unknown type \"banana\""));
}

#[test]
fn matchup_rows_from_detail_sheet_land_on_their_page() {
    let detail_rows = vec![
        Row::from_pairs(&[
            ("page_num", "6"),
            ("context", "Founded in 1976"),
            ("center_text", "Apple"),
        ]),
        Row::from_pairs(&[
            ("page_num", "6"),
            ("context", "Search giant"),
            ("center_text", "Google"),
        ]),
    ];
    let index = index_by_page(&detail_rows);

    let mut diag = Diagnostics::new();
    let pages = assemble_pages(&pages_fixture(), &index, &mut diag);
    let book = PageBook::new(TOTAL_PAGES, pages);

    let PageVariant::Matchup { items, .. } = book.page_configuration(6) else {
        panic!("page 6 should be a matchup");
    };
    let centers: Vec<&str> = items.iter().map(|i| i.center_text.as_str()).collect();
    assert_eq!(centers, ["Apple", "Google"]);
    // No empty-matchup warning this time; only the banana row warns.
    assert_eq!(diag.len(), 1);
}

#[test]
fn emitted_module_compresses_the_year_run_and_skips_page_seven() {
    let (book, _) = run_fixture();
    let module = render_module(&book, "page_config.xlsx", "2026-01-01T00:00:00Z");

    assert!(module.contains("    5: {"));
    assert!(module.contains("Array.from({length: 10}"));
    assert!(module.contains("clue: 2024 - i"));
    assert!(module.contains("    6: {"));
    assert!(!module.contains("    7: {"));
    assert!(module.contains("totalPages: 100,"));
}

#[test]
fn emitted_module_writes_cleanly_to_disk() {
    let (book, _) = run_fixture();
    let module = render_module(&book, "page_config.xlsx", "2026-01-01T00:00:00Z");

    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("src/utils/pageConfig.ts");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, &module).unwrap();

    let read_back = std::fs::read_to_string(&out).unwrap();
    assert_eq!(read_back, module);
}

#[test]
fn lookup_operations_agree_with_book_bounds() {
    let (book, _) = run_fixture();
    assert!(book.page_exists(1));
    assert!(book.page_exists(100));
    assert!(!book.page_exists(0));
    assert!(!book.page_exists(-5));
    assert!(!book.page_exists(101));

    assert_eq!(
        book.answer_key_url(5),
        "https://example.com/page-5-answers"
    );
    // Matchup page 6 has no configured URL; the derived default applies.
    assert_eq!(
        book.answer_key_url(6),
        "https://example.com/page-6-answers"
    );
}
