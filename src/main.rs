use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use werty::ui::cli::{run_search, Cli, Commands};
use werty::{seed_results, Config, SearchTui, SessionState};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Logs go to stderr, except in the TUI where they would corrupt the screen
fn init_logging(tui: bool, log_file: Option<&Path>) -> Result<()> {
    match (tui, log_file) {
        (_, Some(path)) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (false, None) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
        }
        (true, None) => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tui = !matches!(cli.command, Some(Commands::Search(_)));
    init_logging(tui, cli.log_file.as_deref())?;

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting werty");

    match cli.command {
        None | Some(Commands::Tui) => handle_tui(&config),
        Some(Commands::Search(args)) => {
            let mut stdout = std::io::stdout().lock();
            run_search(&config, &args, &mut stdout)?;
            Ok(())
        }
    }
}

fn handle_tui(config: &Config) -> Result<()> {
    let session = SessionState::from_config(config, seed_results());
    let mut tui = SearchTui::new(session);
    tui.run().context("TUI failed")?;
    Ok(())
}
