//! The assembled configuration artifact.
//!
//! [`PageBook`] is what a sync run produces: a fixed book size plus the
//! explicitly-configured pages, keyed by page number. The three lookup
//! operations here are the same ones the emitted TypeScript module exposes
//! to the site at build time — implementing them on the Rust side keeps the
//! fallback rules testable without executing the generated source.
//!
//! Lookups take `i64` because the book's consumers probe with arbitrary
//! integers (page 0, page -1, page 4096); every probe gets a deterministic
//! answer, never a panic or an absence.

use crate::types::PageVariant;
use std::collections::BTreeMap;

/// Book size used when the config file doesn't override it.
pub const DEFAULT_TOTAL_PAGES: u32 = 100;

/// Filler body for pages with no explicit configuration. Also embedded in
/// the emitted module's fallback branch, so both sides synthesize the same
/// placeholder.
pub(crate) const PLACEHOLDER_BODY: &str = "The content for this page is dynamically generated. \
Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor \
incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

/// The full configuration artifact for one generator run.
#[derive(Debug)]
pub struct PageBook {
    total_pages: u32,
    pages: BTreeMap<u32, PageVariant>,
}

impl PageBook {
    pub fn new(total_pages: u32, pages: BTreeMap<u32, PageVariant>) -> Self {
        Self { total_pages, pages }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// The explicitly-configured pages, in page-number order.
    pub fn pages(&self) -> &BTreeMap<u32, PageVariant> {
        &self.pages
    }

    /// Number of explicitly-configured pages.
    pub fn configured_count(&self) -> usize {
        self.pages.len()
    }

    /// The configuration for page `n`: the configured variant if one exists,
    /// otherwise a synthesized placeholder text page.
    pub fn page_configuration(&self, n: i64) -> PageVariant {
        u32::try_from(n)
            .ok()
            .and_then(|key| self.pages.get(&key))
            .cloned()
            .unwrap_or_else(|| placeholder(n))
    }

    /// Page `n`'s answer-key URL, falling back to the derived default when
    /// the configured URL is empty.
    pub fn answer_key_url(&self, n: i64) -> String {
        let configured = self.page_configuration(n);
        let url = configured.answer_key_url();
        if url.is_empty() {
            default_answer_key_url(n)
        } else {
            url.to_string()
        }
    }

    /// Whether page `n` is within the book, regardless of configuration.
    pub fn page_exists(&self, n: i64) -> bool {
        n >= 1 && n <= i64::from(self.total_pages)
    }
}

/// The derived answer-key URL for page `n`.
pub fn default_answer_key_url(n: i64) -> String {
    format!("https://example.com/page-{n}-answers")
}

/// Deterministic placeholder for an unconfigured page number.
pub fn placeholder(n: i64) -> PageVariant {
    PageVariant::Text {
        content: format!("This is page {n} of our book. {PLACEHOLDER_BODY}"),
        answer_key_url: default_answer_key_url(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_page_five() -> PageBook {
        let mut pages = BTreeMap::new();
        pages.insert(
            5,
            PageVariant::Text {
                content: "configured".to_string(),
                answer_key_url: "https://answers.example.net/five".to_string(),
            },
        );
        PageBook::new(DEFAULT_TOTAL_PAGES, pages)
    }

    #[test]
    fn page_exists_matches_book_bounds_exactly() {
        let book = book_with_page_five();
        for n in [1, 2, 50, 99, 100] {
            assert!(book.page_exists(n), "page {n} should exist");
        }
        for n in [0, -1, -100, 101, 4096] {
            assert!(!book.page_exists(n), "page {n} should not exist");
        }
    }

    #[test]
    fn page_exists_ignores_configuration_gaps() {
        // Page 7 has no configured variant but is still inside the book.
        assert!(book_with_page_five().page_exists(7));
    }

    #[test]
    fn configured_page_is_returned_as_is() {
        let book = book_with_page_five();
        assert_eq!(
            book.page_configuration(5),
            PageVariant::Text {
                content: "configured".to_string(),
                answer_key_url: "https://answers.example.net/five".to_string(),
            }
        );
    }

    #[test]
    fn unconfigured_page_synthesizes_placeholder() {
        let book = book_with_page_five();
        let PageVariant::Text {
            content,
            answer_key_url,
        } = book.page_configuration(742)
        else {
            panic!("placeholder must be a text variant");
        };
        assert!(content.contains("This is page 742 of our book."));
        assert_eq!(answer_key_url, "https://example.com/page-742-answers");
    }

    #[test]
    fn negative_page_numbers_get_placeholders_too() {
        let book = book_with_page_five();
        let variant = book.page_configuration(-1);
        assert_eq!(variant.answer_key_url(), "https://example.com/page--1-answers");
    }

    #[test]
    fn answer_key_url_prefers_configured_value() {
        let book = book_with_page_five();
        assert_eq!(book.answer_key_url(5), "https://answers.example.net/five");
    }

    #[test]
    fn answer_key_url_falls_back_when_configured_url_is_empty() {
        let mut pages = BTreeMap::new();
        pages.insert(
            9,
            PageVariant::Text {
                content: "no url".to_string(),
                answer_key_url: String::new(),
            },
        );
        let book = PageBook::new(DEFAULT_TOTAL_PAGES, pages);
        assert_eq!(book.answer_key_url(9), "https://example.com/page-9-answers");
    }

    #[test]
    fn answer_key_url_for_unconfigured_page_is_derived() {
        let book = book_with_page_five();
        assert_eq!(
            book.answer_key_url(42),
            "https://example.com/page-42-answers"
        );
    }
}
