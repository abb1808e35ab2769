use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use quizbook::{assemble, book::PageBook, config, emit, matchup, output, types::Diagnostics, workbook};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "quizbook")]
#[command(about = "Regenerate the quiz book's page configuration from its workbook")]
#[command(long_about = "\
Regenerate the quiz book's page configuration from its workbook

The workbook is the data source. One sheet describes the pages, a second
holds matchup pairings; this tool turns both into the TypeScript module
the site renders from.

Workbook structure (first four rows of each sheet are template chrome):

  Pages sheet, one row per page:
    Page # | Type | Title | Description | Items note | Columns
    | Answer key URL | Callout note | Side | Rotation | Icon

    Type is list, matchup, or text. For list pages the items note is prose
    like \"25 items – clues are years descending from 2024\" or
    \"10 items – clues are rank numbers\". For text pages the description
    is the page body.

  Matchup Items sheet, one row per pairing:
    Page # | Context | Center text | Notes

Rows the tool cannot use degrade to safe defaults with a warning; only a
missing workbook or sheet aborts the run.

Run 'quizbook gen-config' to generate a documented quizbook.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Input workbook (overrides quizbook.toml)
    #[arg(long, global = true)]
    excel: Option<PathBuf>,

    /// Output module path (overrides quizbook.toml)
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Config file
    #[arg(long, default_value = "quizbook.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read the workbook and regenerate the configuration module (default)
    Sync,
    /// Validate the workbook without writing anything
    Check,
    /// Print a stock quizbook.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    let excel = cli.excel.unwrap_or_else(|| PathBuf::from(&cfg.workbook));
    let out = cli.out.unwrap_or_else(|| PathBuf::from(&cfg.out));

    match cli.command.unwrap_or(Command::Sync) {
        Command::Sync => {
            let (book, diag) = run_pipeline(&excel, cfg.total_pages)?;

            let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            let module = emit::render_module(&book, &source_name(&excel), &generated_at);

            if let Some(dir) = out.parent()
                && !dir.as_os_str().is_empty()
            {
                std::fs::create_dir_all(dir)?;
            }
            std::fs::write(&out, module)?;

            output::print_run_output(&book, &diag, Some(&out));
        }
        Command::Check => {
            let (book, diag) = run_pipeline(&excel, cfg.total_pages)?;
            output::print_run_output(&book, &diag, None);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Read both sheets and assemble the artifact.
fn run_pipeline(
    excel: &Path,
    total_pages: u32,
) -> Result<(PageBook, Diagnostics), workbook::WorkbookError> {
    let mut wb = workbook::open(excel)?;
    let page_rows = workbook::read_sheet(&mut wb, &workbook::PAGES)?;
    let detail_rows = workbook::read_sheet(&mut wb, &workbook::MATCHUP_ITEMS)?;

    let matchup_index = matchup::index_by_page(&detail_rows);
    let mut diag = Diagnostics::new();
    let pages = assemble::assemble_pages(&page_rows, &matchup_index, &mut diag);

    Ok((PageBook::new(total_pages, pages), diag))
}

/// Workbook filename for the emitted module's banner.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
