use anyhow::{Context, Result};
use std::path::PathBuf;

use brine::config::Config;
use brine::crawler::{StopCondition, Walker};
use brine::rank::{rank, rank_brief};
use brine::sentiment::SentimentScorer;

/// Run a live scrape and print the ranked feed as JSON
pub async fn run(
    config: Config,
    num: usize,
    pages: Option<u32>,
    brief: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let scorer = SentimentScorer::new();
    let walker =
        Walker::from_config(&config.scraper, scorer).context("Failed to create walker")?;

    let stop = match pages {
        Some(limit) => StopCondition::PageLimit(limit),
        None => StopCondition::TargetCount(num),
    };

    let records = walker
        .walk(stop)
        .await
        .context("Scrape aborted, no partial results")?;

    println!("Scraped {} comments", records.len());

    let json = if brief {
        serde_json::to_string_pretty(&rank_brief(records, num))?
    } else {
        serde_json::to_string_pretty(&rank(records, num))?
    };

    write_output(&json, output)
}

/// Print to stdout or write to a file
pub(crate) fn write_output(json: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote ranked feed to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
