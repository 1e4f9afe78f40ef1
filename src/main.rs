//! Carbook entry point.
//! Parses arguments, sets up logging and the database, then hands the
//! terminal to the interactive menu.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::PathBuf;

use carbook::infra::app_config::{self, AppConfig, DB_PATH_ENV};
use carbook::infra::db::Database;
use carbook::ui::ConsoleError;
use carbook::ui::terminal::TerminalConsole;

#[derive(Parser, Debug)]
#[command(name = "carbook")]
#[command(version)]
#[command(about = "Keep track of car owners and their cars", long_about = None)]
struct Args {
    /// SQLite database file (created if missing)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level written to the log file (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: &str) -> Result<()> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid log level: {level}"))?;

    // The terminal belongs to the menu, so logs go to a file.
    let log_path = app_config::log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(app_config::config_path);
    let config: AppConfig = app_config::load_config(&config_path)?;

    let level = args
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or("warn");
    init_logging(level)?;

    let db_path =
        app_config::resolve_database_path(args.db, std::env::var(DB_PATH_ENV).ok(), &config);
    let db = Database::open_at(&db_path)?;

    TerminalConsole::check_interactive()?;
    let mut console = TerminalConsole::new();

    match carbook::commands::run(&db, &mut console) {
        Ok(()) => Ok(()),
        Err(err)
            if matches!(
                err.downcast_ref::<ConsoleError>(),
                Some(ConsoleError::Interrupted)
            ) =>
        {
            log::info!("Session interrupted");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
