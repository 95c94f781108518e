//! Comment listing page extraction
//!
//! Pulls usernames, comment bodies, and the next-page token out of one
//! fetched listing page. Usernames and comments are paired positionally;
//! the Nth username belongs to the Nth comment.

use scraper::Html;

use crate::error::ParseError;
use crate::parser::selectors;

/// Extracted contents of one comment listing page
#[derive(Debug, Clone)]
pub struct CommentPage {
    /// Usernames in document order
    pub users: Vec<String>,

    /// Comment bodies in document order
    pub comments: Vec<String>,

    /// Query-string token identifying the next page
    pub next_token: String,
}

impl CommentPage {
    /// Positionally paired (user, comment) tuples
    ///
    /// When the two sequences differ in length the pairing truncates to the
    /// shorter one; strict handling happens at extraction time instead.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.users
            .iter()
            .map(String::as_str)
            .zip(self.comments.iter().map(String::as_str))
    }

    /// Number of pairable (user, comment) tuples on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len().min(self.comments.len())
    }

    /// True when the page yielded no pairable comments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract a comment page from raw HTML
///
/// Collects every `a.hnuser` username and `div.comment` body in document
/// order and takes the next-page token from the query string of the single
/// `a.morelink` anchor.
///
/// A username/comment count mismatch is tolerated by default (the walker
/// pairs up to the shorter sequence); with `strict` set it becomes
/// [`ParseError::CountMismatch`]. Markup drift that yields no usernames or
/// comments at all is not an error in either mode.
///
/// # Errors
///
/// [`ParseError::MoreLinkNotFound`] when the pagination anchor is absent,
/// [`ParseError::PageTokenMissing`] when its href has no query string, and
/// [`ParseError::CountMismatch`] in strict mode.
pub fn extract_page(html: &str, strict: bool) -> Result<CommentPage, ParseError> {
    let document = Html::parse_document(html);

    let users: Vec<String> = document
        .select(&selectors::USERNAME)
        .map(|el| el.text().collect::<String>())
        .collect();

    let comments: Vec<String> = document
        .select(&selectors::COMMENT)
        .map(|el| el.text().collect::<String>())
        .collect();

    if users.len() != comments.len() {
        if strict {
            return Err(ParseError::CountMismatch {
                users: users.len(),
                comments: comments.len(),
            });
        }
        tracing::warn!(
            users = users.len(),
            comments = comments.len(),
            "Username/comment count mismatch, pairing truncates to the shorter side"
        );
    }

    let next_token = next_page_token(&document)?;

    Ok(CommentPage {
        users,
        comments,
        next_token,
    })
}

/// Pull the pagination token out of the "More" anchor
fn next_page_token(document: &Html) -> Result<String, ParseError> {
    let anchor = document
        .select(&selectors::MORE_LINK)
        .next()
        .ok_or(ParseError::MoreLinkNotFound)?;

    let href = anchor.value().attr("href").ok_or(ParseError::MoreLinkNotFound)?;

    match href.split_once('?') {
        Some((_, token)) => Ok(token.to_string()),
        None => Err(ParseError::PageTokenMissing),
    }
}
