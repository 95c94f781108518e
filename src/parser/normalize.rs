//! Comment text normalization
//!
//! Cleans raw comment text before sentiment scoring. The removal steps run
//! in a fixed order; later patterns assume earlier ones already stripped
//! their targets (the entity pattern, for one, would otherwise eat the
//! inside of a tag).

use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled patterns, applied in declaration order
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.]+@\w+\.[a-z]{3}").unwrap());

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?(?:[a-zA-Z]|[0-9]|[$-_@.&+#]|[!*(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .unwrap()
});

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&.*?;").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Normalize raw comment text
///
/// Applies, in order: tag removal, email removal, URL removal, entity
/// removal, whitespace collapsing. Pure function; an empty string yields an
/// empty string.
///
/// # Examples
///
/// ```
/// use brine::parser::normalize;
///
/// assert_eq!(normalize("  a   b  "), "a b");
/// assert_eq!(normalize("<b>hi</b> &amp; bye"), "hi bye");
/// ```
pub fn normalize(text: &str) -> String {
    let result = strip_tags(text);
    let result = strip_emails(&result);
    let result = strip_urls(&result);
    let result = strip_entities(&result);
    collapse_whitespace(&result)
}

/// Replace HTML tags (`<...>`, non-greedy) with a single space
pub fn strip_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, " ").to_string()
}

/// Remove email-like tokens (word characters/dots, `@`, domain, 3-letter TLD)
pub fn strip_emails(text: &str) -> String {
    EMAIL_REGEX.replace_all(text, "").to_string()
}

/// Remove URL tokens (`http`/`https` followed by URL-safe characters,
/// including percent-encoded bytes)
pub fn strip_urls(text: &str) -> String {
    URL_REGEX.replace_all(text, "").to_string()
}

/// Remove HTML entity references (`&...;`, non-greedy)
pub fn strip_entities(text: &str) -> String {
    ENTITY_REGEX.replace_all(text, "").to_string()
}

/// Collapse runs of 2+ whitespace characters to one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_all_token_kinds() {
        let dirty = "<b>Hello</b> visit http://example.com now &amp; me@x.com";
        assert_eq!(normalize(dirty), "Hello visit now");
    }

    #[test]
    fn test_normalize_whitespace_collapse() {
        assert_eq!(normalize("  a   b  "), "a b");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_strip_tags_replaces_with_space() {
        assert_eq!(strip_tags("a<br>b"), "a b");
        assert_eq!(strip_tags("<p>x</p>"), " x ");
    }

    #[test]
    fn test_strip_tags_non_greedy() {
        assert_eq!(strip_tags("<a href='x'>link</a> tail"), " link  tail");
    }

    #[test]
    fn test_strip_emails() {
        assert_eq!(strip_emails("mail me@example.com please"), "mail  please");
        assert_eq!(strip_emails("dotted.name@host.org"), "");
    }

    #[test]
    fn test_strip_emails_requires_three_letter_tld() {
        // A two-letter TLD does not match the email pattern
        assert_eq!(strip_emails("me@x.io"), "me@x.io");
    }

    #[test]
    fn test_strip_urls() {
        assert_eq!(strip_urls("see https://a.b/c?d=1 here"), "see  here");
        assert_eq!(strip_urls("http://x.com/%20y end"), " end");
    }

    #[test]
    fn test_strip_entities() {
        assert_eq!(strip_entities("fish &amp; chips &gt; rice"), "fish  chips  rice");
    }

    #[test]
    fn test_entity_after_tag_ordering() {
        // With tags already stripped the entity pattern only sees real
        // entity references
        let text = strip_tags("<span>&quot;quoted&quot;</span>");
        assert_eq!(strip_entities(&text), " quoted ");
    }

    #[test]
    fn test_collapse_whitespace_mixed() {
        assert_eq!(collapse_whitespace("a \t\n b"), "a b");
        assert_eq!(collapse_whitespace("single space"), "single space");
    }

    #[test]
    fn test_malformed_input_passes_through() {
        // Unclosed tags and bare ampersands are left as-is
        assert_eq!(normalize("a < b & c"), "a < b & c");
    }
}
