use anyhow::{Context, Result};
use std::path::PathBuf;

use brine::config::Config;
use brine::crawler::PageFetcher;
use brine::dataset::DatasetLoader;
use brine::models::CommentRecord;
use brine::rank::rank;
use brine::sentiment::SentimentScorer;

use crate::commands::scrape::write_output;

/// Load the historical dataset, score it, and print the ranked feed
pub async fn run(
    config: Config,
    files: Option<usize>,
    limit: Option<usize>,
    num: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    let files = files.unwrap_or(config.dataset.file_count);
    let limit = limit.unwrap_or(config.dataset.row_limit);

    let fetcher = PageFetcher::new(&config.scraper).context("Failed to create fetcher")?;
    let loader = DatasetLoader::new(fetcher, config.dataset.seed_url.clone());

    let rows = loader
        .load(files, limit)
        .await
        .context("Dataset load failed")?;

    println!("Loaded {} historical comments", rows.len());

    let scorer = SentimentScorer::new();
    let records: Vec<CommentRecord> = rows
        .iter()
        .map(|row| CommentRecord::from_pair(&row.user, &row.comment, &scorer))
        .collect();

    let json = serde_json::to_string_pretty(&rank(records, num))?;
    write_output(&json, output)
}
