use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::search::filter::RelevanceThreshold;
use crate::search::model::{seed_results, ContentType, DateFilter, SearchResult, SourceFilter};
use crate::state::session::SessionState;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// werty - Browse search results with content filters and session history
#[derive(Parser, Debug)]
#[command(name = "werty")]
#[command(about = "A terminal search-results browser with smart filters", long_about = None)]
#[command(version)]
#[command(subcommand_required = false)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: <config dir>/werty/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file while the TUI is running
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive browser (default)
    Tui,
    /// Run a search and print the filtered results
    Search(SearchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query
    pub query: String,
    /// Content type: all, web, image, video, news
    #[arg(short = 't', long = "type", value_parser = str::parse::<ContentType>)]
    pub content_type: Option<ContentType>,
    /// Minimum relevance, 0-100 (snapped to a multiple of 5)
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    pub min_relevance: Option<i64>,
    /// Date filter: anytime, day, week, month, year (not applied to results)
    #[arg(short, long, value_parser = str::parse::<DateFilter>)]
    pub date: Option<DateFilter>,
    /// Source filter: all, verified, news, blog (not applied to results)
    #[arg(short, long, value_parser = str::parse::<SourceFilter>)]
    pub source: Option<SourceFilter>,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Session over the seed results with these arguments applied on top of `config`
    pub fn session(&self, config: &Config) -> SessionState {
        let mut session = SessionState::from_config(config, seed_results());
        if let Some(content_type) = self.content_type {
            session.set_content_type(content_type);
        }
        if let Some(value) = self.min_relevance {
            session.set_relevance_threshold(RelevanceThreshold::new(value));
        }
        if let Some(date) = self.date {
            session.set_date_filter(date);
        }
        if let Some(source) = self.source {
            session.set_source_filter(source);
        }
        session
    }
}

/// Run a one-shot search and write the filtered results to `out`
pub fn run_search(config: &Config, args: &SearchArgs, out: &mut impl Write) -> Result<()> {
    let mut session = args.session(config);
    if !session.submit_query(&args.query) {
        return Err(Error::EmptyQuery);
    }

    let results = session.filtered_results();
    if args.json {
        writeln!(out, "{}", SearchResult::list_to_json(&results)?)?;
        return Ok(());
    }

    writeln!(out, "Searching for: \"{}\"", session.query())?;
    writeln!(
        out,
        "Type: {}  Relevance: >= {}",
        session.content_type().label(),
        session.relevance_threshold()
    )?;
    if session.inert_filters_selected() {
        writeln!(
            out,
            "Note: date ({}) and source ({}) filters are not applied to results.",
            session.date_filter(),
            session.source_filter()
        )?;
    }

    if results.is_empty() {
        writeln!(out, "\nNo results found.")?;
        return Ok(());
    }

    writeln!(out, "\nFound {} results:", results.len())?;
    for (i, result) in results.iter().enumerate() {
        writeln!(out, "\n{}. {} ({}%)", i + 1, result.title, result.relevance)?;
        writeln!(out, "   {}", result.url)?;
        writeln!(out, "   [{}] {} • {}", result.kind, result.source, result.date)?;
        writeln!(out, "   {}", result.description)?;
    }

    Ok(())
}
