//! CSS selectors for the Hacker News comment listing markup

use lazy_static::lazy_static;
use scraper::Selector;

// Helper macro to parse selectors safely at compile time
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

lazy_static! {
    /// Username anchors, one per comment
    pub static ref USERNAME: Selector = parse_selector!("a.hnuser");

    /// Comment body containers, in document order
    pub static ref COMMENT: Selector = parse_selector!("div.comment");

    /// The single "More" pagination anchor
    pub static ref MORE_LINK: Selector = parse_selector!("a.morelink");
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_parse() {
        // Force the lazy statics so an invalid selector fails the test suite
        let html = Html::parse_document("<html></html>");
        assert_eq!(html.select(&USERNAME).count(), 0);
        assert_eq!(html.select(&COMMENT).count(), 0);
        assert_eq!(html.select(&MORE_LINK).count(), 0);
    }
}
