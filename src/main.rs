use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brine::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "brine",
    version,
    about = "Hacker News comment scraper with sentiment ranking",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// Configuration file (TOML); environment variables otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape live comment pages and rank them by sentiment
    Scrape {
        /// Number of ranked comments to return
        #[arg(short, long, default_value = "100")]
        num: usize,

        /// Walk a fixed number of pages instead of a target comment count
        #[arg(short, long)]
        pages: Option<u32>,

        /// Output [user, score] pairs instead of [user, comment, score]
        #[arg(long, default_value = "false")]
        brief: bool,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load the historical comment dataset and rank it by sentiment
    Dataset {
        /// Number of CSV files to fetch (0-11)
        #[arg(short, long)]
        files: Option<usize>,

        /// Maximum rows to load before ranking
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of ranked comments to return
        #[arg(short, long, default_value = "100")]
        num: usize,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;

    match cli.command {
        Commands::Scrape {
            num,
            pages,
            brief,
            output,
        } => {
            tracing::info!(num, pages = ?pages, brief, "Starting scrape command");
            commands::scrape::run(config, num, pages, brief, output).await?;
        }

        Commands::Dataset {
            files,
            limit,
            num,
            output,
        } => {
            tracing::info!(files = ?files, limit = ?limit, num, "Starting dataset command");
            commands::dataset::run(config, files, limit, num, output).await?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("brine=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("brine=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    Ok(())
}
