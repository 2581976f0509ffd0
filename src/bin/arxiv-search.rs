use std::{path::PathBuf, time::Instant};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};

use arxiv_search::{
    config::DEFAULT_ENV_FILE,
    logging,
    parser::ArxivParser,
    storage::LocalSaver
};

#[derive(Parser, Debug)]
#[command(name = "arxiv-search")]
#[command(about = "Lists arXiv papers submitted within a date range")]
#[command(version)]
struct Cli {
    /// First submitted date (YYYY-MM-DD); defaults to the end date minus WINDOW_DAYS
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last submitted date (YYYY-MM-DD); defaults to today minus DATE_OFFSET
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Dotenv file with search settings, skipped when missing
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Write the records to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Jsonl)]
    format: OutputFormat,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Jsonl,
    Readme,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.json_logs);
    let program_start = Instant::now();

    let parser = ArxivParser::from_env(&cli.env_file)
        .with_context(|| format!("invalid search settings (env file {})", cli.env_file.display()))?;
    let range = parser.resolve_range(Local::now().date_naive(), cli.start, cli.end)?;

    let page = parser.get_search_page(&range)
        .with_context(|| format!("failed to search arXiv for {}..{}", range.start, range.end))?;

    info!("found {} papers", page.records.len());
    for paper in &page.records {
        info!("{}", paper.title);
    }
    match page.records.last() {
        Some(last) => info!("last paper: {:?}", last),
        None => warn!("search page listed no papers"),
    }
    info!("{} results found", page.total);

    if let Some(path) = &cli.output {
        match cli.format {
            OutputFormat::Jsonl => LocalSaver::save_records_as_jsonl(path, &page.records)?,
            OutputFormat::Readme => LocalSaver::save_records_as_readme(path, &page.records)?,
        }
        info!(path = %path.display(), records = page.records.len(), "saved papers");
    }

    info!("Program took {:.2} seconds to run", program_start.elapsed().as_secs_f64());
    Ok(())
}
