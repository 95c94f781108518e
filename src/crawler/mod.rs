//! Page fetching and pagination
//!
//! The fetcher issues one blocking GET per page; the walker chains pages
//! together by following each page's "More" token until its stop condition
//! is met.

pub mod fetcher;
pub mod walker;

pub use fetcher::PageFetcher;
pub use walker::{StopCondition, Walker};
