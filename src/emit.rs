//! Source serialization.
//!
//! Final stage of the sync pipeline: renders a [`PageBook`] as the
//! TypeScript module the site imports at build time. The output is meant to
//! be read and diffed by humans, so two compression heuristics keep it
//! compact:
//!
//! - a clue sequence that is a strictly-by-1 descending integer run becomes
//!   `Array.from({length: N}, (_, i) => ({ clue: START - i }))`
//! - a strict `"#1", "#2", …` run becomes the equivalent rank generator
//!
//! Everything else is emitted as a literal element list. The shorthand is a
//! readability optimization only: expanding an emitted generator reproduces
//! the exact sequence it replaced, and a consumer that only understands
//! literal lists loses nothing if the heuristics are disabled.
//!
//! String literals are JSON-escaped via `serde_json`, matching what the
//! emitted module's own tooling would produce.

use crate::book::{self, PageBook};
use crate::types::{Callout, Clue, MatchupItem, PageVariant, Side};

/// Render the full configuration module.
///
/// `source_name` is the workbook filename for the banner; `generated_at` is
/// injected by the caller so the renderer stays deterministic under test.
pub fn render_module(book: &PageBook, source_name: &str, generated_at: &str) -> String {
    let rule = "─".repeat(77);
    let pages_block = book
        .pages()
        .iter()
        .map(|(page_num, variant)| {
            indent(&format!("{page_num}: {}", serialize_page(variant)), 4)
        })
        .collect::<Vec<_>>()
        .join(",\n\n");

    format!(
        r#"import type {{ PageConfig, PageConfiguration }} from './pageTypes.js';

// {rule}
// AUTO-GENERATED by quizbook sync
// Source: {source_name}
// Generated: {generated_at}
//
// DO NOT EDIT BY HAND — edit the workbook and re-run quizbook sync instead.
// {rule}

export const pageConfig: PageConfig = {{
  totalPages: {total_pages},

  pages: {{
{pages_block}
  }},

  getPageConfiguration(pageNum: number): PageConfiguration {{
    const page = this.pages[pageNum];
    if (page) {{
      return page;
    }}
    return {{
      type: 'text',
      content: `This is page ${{pageNum}} of our book. {placeholder_body}`,
      answerKeyUrl: `https://example.com/page-${{pageNum}}-answers`
    }};
  }},

  getAnswerKeyUrl(pageNum: number): string {{
    return this.getPageConfiguration(pageNum).answerKeyUrl || `https://example.com/page-${{pageNum}}-answers`;
  }},

  pageExists(pageNum: number): boolean {{
    return pageNum >= 1 && pageNum <= this.totalPages;
  }}
}};
"#,
        total_pages = book.total_pages(),
        placeholder_body = book::PLACEHOLDER_BODY,
    )
}

/// Serialize one page variant as a TypeScript object literal.
fn serialize_page(variant: &PageVariant) -> String {
    let mut lines = vec!["{".to_string()];

    match variant {
        PageVariant::Text {
            content,
            answer_key_url,
        } => {
            lines.push("  type: 'text',".to_string());
            lines.push(format!("  content: {},", ts_string(content)));
            lines.push(format!("  answerKeyUrl: {}", ts_string(answer_key_url)));
        }
        PageVariant::List {
            title,
            description,
            items,
            columns,
            answer_key_url,
            callout,
        } => {
            lines.push("  type: 'list',".to_string());
            push_common_fields(
                &mut lines,
                title,
                description,
                &serialize_clues(items),
                *columns,
                answer_key_url,
                callout,
            );
        }
        PageVariant::Matchup {
            title,
            description,
            items,
            columns,
            answer_key_url,
            callout,
        } => {
            lines.push("  type: 'matchup',".to_string());
            push_common_fields(
                &mut lines,
                title,
                description,
                &serialize_matchup_items(items),
                *columns,
                answer_key_url,
                callout,
            );
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

fn push_common_fields(
    lines: &mut Vec<String>,
    title: &str,
    description: &str,
    items: &str,
    columns: u32,
    answer_key_url: &str,
    callout: &Option<Callout>,
) {
    lines.push(format!("  title: {},", ts_string(title)));
    lines.push(format!("  description: {},", ts_string(description)));
    lines.push(format!("  items: {},", reindent(items, 2)));
    lines.push(format!("  columns: {columns},"));
    match callout {
        Some(callout) => {
            lines.push(format!("  answerKeyUrl: {},", ts_string(answer_key_url)));
            lines.push(format!(
                "  actionContent: {}",
                reindent(&serialize_callout(callout), 2)
            ));
        }
        None => lines.push(format!("  answerKeyUrl: {}", ts_string(answer_key_url))),
    }
}

/// Serialize a clue sequence, compressing generator-eligible runs.
fn serialize_clues(items: &[Clue]) -> String {
    let count = items.len();
    if count == 0 {
        return "[]".to_string();
    }

    if let Some(start) = descending_run_start(items) {
        return format!(
            "Array.from({{length: {count}}}, (_, i) => ({{\n  clue: {start} - i,\n}}))"
        );
    }

    if is_rank_run(items) {
        return format!(
            "Array.from({{length: {count}}}, (_, i) => ({{\n  clue: `#${{i + 1}}`,\n}}))"
        );
    }

    let lines: Vec<String> = items
        .iter()
        .map(|clue| format!("  {{ clue: {} }},", serialize_clue(clue)))
        .collect();
    format!("[\n{}\n]", lines.join("\n"))
}

fn serialize_clue(clue: &Clue) -> String {
    match clue {
        Clue::Number(n) => n.to_string(),
        Clue::Text(s) => ts_string(s),
    }
}

fn serialize_matchup_items(items: &[MatchupItem]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let lines: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "  {{ centerText: {}, context: {} }},",
                ts_string(&item.center_text),
                ts_string(&item.context)
            )
        })
        .collect();
    format!("[\n{}\n]", lines.join("\n"))
}

fn serialize_callout(callout: &Callout) -> String {
    let position = match callout.side {
        Side::Left => "left",
        Side::Right => "right",
    };
    [
        "{".to_string(),
        format!("  content: {},", ts_string(&callout.content)),
        format!("  position: '{position}',"),
        format!("  rotation: {},", format_number(callout.rotation)),
        format!("  icon: '{}'", callout.icon),
        "}".to_string(),
    ]
    .join("\n")
}

/// Start value of a strictly-by-1 descending integer run, if the whole
/// sequence is one. Empty sequences don't qualify — a literal `[]` reads
/// better than a zero-length generator.
pub fn descending_run_start(items: &[Clue]) -> Option<i64> {
    let first = items.first()?.as_number()?;
    let descending = items
        .iter()
        .enumerate()
        .all(|(i, clue)| clue.as_number() == Some(first - i as i64));
    descending.then_some(first)
}

/// Whether the sequence is exactly `"#1", "#2", …`.
pub fn is_rank_run(items: &[Clue]) -> bool {
    !items.is_empty()
        && items
            .iter()
            .enumerate()
            .all(|(i, clue)| clue.as_text() == Some(format!("#{}", i + 1).as_str()))
}

/// JSON-escaped double-quoted string literal.
fn ts_string(s: &str) -> String {
    // Serializing a str to JSON cannot fail.
    serde_json::to_string(s).unwrap()
}

/// Render a rotation without a spurious `.0` on whole numbers.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Indent every line of `s` by `spaces`.
fn indent(s: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    s.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indent continuation lines (all but the first) by `spaces`, for values
/// embedded after a `key: ` prefix.
fn reindent(s: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    s.replace('\n', &format!("\n{pad}"))
}
