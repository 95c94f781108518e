//! Ranking aggregation
//!
//! Sorts scored comment records ascending by score, so the most negative
//! comments come first, and exposes them as the 1-indexed rank mapping the
//! output contract promises. Fetch order is newest-first, and the stable
//! sort keeps that order for equal scores.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::CommentRecord;

/// One ranked row, serialized as `[user, comment, score]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry(pub String, pub String, pub f64);

/// One ranked row in the reduced shape, serialized as `[user, score]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefEntry(pub String, pub f64);

/// Rank records ascending by score and keep the first `num`
///
/// Returns a mapping from rank (starting at 1) to `[user, comment, score]`
/// rows, where the comment is the cleaned text that was scored. When `num`
/// exceeds the record count, every record is returned; no padding, no error.
pub fn rank(records: Vec<CommentRecord>, num: usize) -> BTreeMap<usize, RankedEntry> {
    sorted_truncated(records, num)
        .into_iter()
        .enumerate()
        .map(|(i, r)| (i + 1, RankedEntry(r.user, r.cleaned_text, r.score)))
        .collect()
}

/// Rank records ascending by score in the reduced `[user, score]` shape
pub fn rank_brief(records: Vec<CommentRecord>, num: usize) -> BTreeMap<usize, BriefEntry> {
    sorted_truncated(records, num)
        .into_iter()
        .enumerate()
        .map(|(i, r)| (i + 1, BriefEntry(r.user, r.score)))
        .collect()
}

/// Stable ascending sort by score, truncated to `num`
fn sorted_truncated(mut records: Vec<CommentRecord>, num: usize) -> Vec<CommentRecord> {
    records.sort_by(|a, b| a.score.total_cmp(&b.score));
    records.truncate(num);
    records
}
