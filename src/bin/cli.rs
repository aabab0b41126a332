//! Library scraper CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use library_scraper::{
    error::Result,
    models::Config,
    pipeline,
    storage::{BookStorage, SqliteStorage, TableCounts},
    utils::{console, http::HttpFetcher},
};

/// Imperial Library book scraper
#[derive(Parser, Debug)]
#[command(name = "library_scraper", version, about = "Imperial Library book scraper")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the SQLite database path from the config
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress progress and summary output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the book index into the book_info table
    Index,

    /// Scrape the book pages listed in book_info into book_content
    Content {
        /// Follow only the first N books
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Run full pipeline: Index → Content
    Run {
        /// Follow only the first N books
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Show row counts of the stored tables
    Stats,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn count_label(count: Option<usize>) -> String {
    count.map_or_else(|| "not written yet".to_string(), |n| n.to_string())
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    console::set_quiet(cli.quiet);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(path) = cli.database {
        config.storage.database = path;
    }
    if cli.quiet {
        config.content.show_progress = false;
    }

    match cli.command {
        Command::Index => {
            config.validate()?;
            let fetcher = HttpFetcher::new(&config.http)?;
            let storage = SqliteStorage::open(&config.storage.database)?;
            let books = pipeline::run_index(&config, &fetcher, &storage)?;
            log::info!(
                "Stored {} books in {}",
                books.len(),
                config.storage.database.display()
            );
        }

        Command::Content { limit } => {
            if limit.is_some() {
                config.content.limit = limit;
            }
            config.validate()?;
            let fetcher = HttpFetcher::new(&config.http)?;
            let storage = SqliteStorage::open(&config.storage.database)?;
            let contents = pipeline::run_content(&config, &fetcher, &storage)?;
            log::info!(
                "Stored {} book pages in {}",
                contents.len(),
                config.storage.database.display()
            );
        }

        Command::Run { limit } => {
            if limit.is_some() {
                config.content.limit = limit;
            }
            config.validate()?;
            let fetcher = HttpFetcher::new(&config.http)?;
            let storage = SqliteStorage::open(&config.storage.database)?;
            let counts = pipeline::run_pipeline(&config, &fetcher, &storage)?;
            console::summary(
                "Stored",
                &[
                    ("book_info", count_label(counts.book_info)),
                    ("book_content", count_label(counts.book_content)),
                ],
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            println!("{}", config.to_toml()?);
            log::info!("✓ Config OK");
        }

        Command::Stats => {
            let counts = if config.storage.database.exists() {
                SqliteStorage::open_read_only(&config.storage.database)?.counts()?
            } else {
                TableCounts::default()
            };
            println!("Database:     {}", config.storage.database.display());
            println!("book_info:    {}", count_label(counts.book_info));
            println!("book_content: {}", count_label(counts.book_content));
        }
    }

    Ok(())
}
