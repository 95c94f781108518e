//! Historical comment dataset loader
//!
//! Fetches a fixed small number of remote CSV files (author, timestamp,
//! text columns), concatenates them, drops incomplete rows, and returns the
//! most recent rows sorted by timestamp descending. The triples it produces
//! flow through the same normalize/score pipeline as live scrapes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::crawler::PageFetcher;
use crate::error::{DatasetError, ValidationError};

/// Maximum number of dataset files the remote store holds
pub const MAX_FILES: usize = 11;

/// One historical comment row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalComment {
    /// Comment author
    pub user: String,

    /// Comment timestamp (timezone suffix stripped)
    pub date_time: NaiveDateTime,

    /// Raw comment text
    pub comment: String,
}

/// Raw CSV row before cleaning; extra columns in the files are ignored
#[derive(Debug, Deserialize)]
struct RawRow {
    author: Option<String>,
    time_ts: Option<String>,
    text: Option<String>,
}

/// Remote CSV dataset loader
pub struct DatasetLoader {
    fetcher: PageFetcher,
    seed_url: String,
}

impl DatasetLoader {
    /// Create a loader fetching files under `seed_url`
    ///
    /// File URLs are `{seed_url}{i}.csv?raw=true` for each file index.
    #[must_use]
    pub fn new(fetcher: PageFetcher, seed_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            seed_url: seed_url.into(),
        }
    }

    /// Load up to `files` CSV files and return the most recent `limit` rows
    ///
    /// Rows with any missing field, or an unparseable timestamp, are
    /// dropped. The result is sorted by timestamp descending.
    ///
    /// # Errors
    ///
    /// Fails fast with a validation error when `files` exceeds
    /// [`MAX_FILES`], before any file is fetched; fetch and CSV errors
    /// abort the load.
    pub async fn load(
        &self,
        files: usize,
        limit: usize,
    ) -> Result<Vec<HistoricalComment>, DatasetError> {
        if files > MAX_FILES {
            return Err(ValidationError::FileCountOutOfRange(files).into());
        }

        let mut rows = Vec::new();

        for i in 0..files {
            let url = format!("{}{}.csv?raw=true", self.seed_url, i);
            let body = self.fetcher.fetch(&url).await?;
            let parsed = parse_rows(body.as_bytes())?;

            tracing::debug!(file = i, rows = parsed.len(), "Loaded dataset file");
            rows.extend(parsed);
        }

        rows.sort_by(|a, b| b.date_time.cmp(&a.date_time));
        rows.truncate(limit);

        tracing::info!(files, rows = rows.len(), "Loaded historical dataset");

        Ok(rows)
    }
}

/// Parse one CSV body into cleaned rows
///
/// Keeps only rows where author, timestamp, and text are all present and
/// the timestamp parses; everything else is dropped silently.
///
/// # Errors
///
/// Returns `DatasetError::Csv` when the body is not decodable CSV
pub fn parse_rows(data: &[u8]) -> Result<Vec<HistoricalComment>, DatasetError> {
    let mut reader = csv::Reader::from_reader(data);
    let mut rows = Vec::new();

    for result in reader.deserialize::<RawRow>() {
        let raw = result?;

        let (author, time_ts, text) = match (raw.author, raw.time_ts, raw.text) {
            (Some(a), Some(ts), Some(t)) if !a.is_empty() && !ts.is_empty() && !t.is_empty() => {
                (a, ts, t)
            }
            _ => continue,
        };

        let Some(date_time) = parse_timestamp(&time_ts) else {
            continue;
        };

        rows.push(HistoricalComment {
            user: author,
            date_time,
            comment: text,
        });
    }

    Ok(rows)
}

/// Parse a dataset timestamp, stripping any `+TZ` suffix first
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let stripped = value.split('+').next().unwrap_or(value).trim();

    NaiveDateTime::parse_from_str(stripped, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(stripped, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_basic() {
        let csv = b"author,time_ts,text\n\
            alice,2014-05-29 08:25:40+00,Interesting point\n\
            bob,2014-05-30 10:00:00+00,Hard disagree\n";

        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].user, "alice");
        assert_eq!(rows[0].comment, "Interesting point");
        assert_eq!(
            rows[0].date_time,
            NaiveDateTime::parse_from_str("2014-05-29 08:25:40", "%Y-%m-%d %H:%M:%S").unwrap()
        );
    }

    #[test]
    fn test_parse_rows_drops_incomplete() {
        let csv = b"author,time_ts,text\n\
            alice,2014-05-29 08:25:40+00,Complete row\n\
            ,2014-05-29 09:00:00+00,No author\n\
            carol,,No timestamp\n\
            dave,2014-05-29 10:00:00+00,\n";

        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user, "alice");
    }

    #[test]
    fn test_parse_rows_drops_bad_timestamp() {
        let csv = b"author,time_ts,text\n\
            alice,yesterday,Some text\n";

        let rows = parse_rows(csv).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_rows_ignores_extra_columns() {
        let csv = b"id,author,time_ts,text,ranking\n\
            1,alice,2014-05-29 08:25:40+00,Hello,42\n";

        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].comment, "Hello");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2014-05-29 08:25:40+00").is_some());
        assert!(parse_timestamp("2014-05-29 08:25:40").is_some());
        assert!(parse_timestamp("2014-05-29 08:25:40.123+00").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_parse_rows_empty_body() {
        let rows = parse_rows(b"author,time_ts,text\n").unwrap();
        assert!(rows.is_empty());
    }
}
