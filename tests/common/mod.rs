//! Common test utilities

use brine::sentiment::Scorer;

/// Deterministic scorer for tests: negative for text containing "bad",
/// positive for "good", neutral otherwise.
pub struct StubScorer;

impl Scorer for StubScorer {
    fn score(&self, text: &str) -> f64 {
        if text.contains("bad") {
            -0.8
        } else if text.contains("good") {
            0.8
        } else {
            0.0
        }
    }
}

/// Build one comment listing page in the scraped site's markup
///
/// `next_token` lands in the "More" anchor's href query string; `None`
/// omits the anchor entirely.
pub fn comment_page(users: &[String], comments: &[String], next_token: Option<&str>) -> String {
    let mut html = String::from("<html><body><table class=\"comment-tree\">");

    for (user, comment) in users.iter().zip(comments.iter()) {
        html.push_str(&format!(
            "<tr class=\"athing comtr\"><td>\
             <a class=\"hnuser\" href=\"user?id={user}\">{user}</a>\
             <div class=\"comment\"><span class=\"commtext c00\">{comment}</span></div>\
             </td></tr>"
        ));
    }

    if let Some(token) = next_token {
        html.push_str(&format!(
            "<a class=\"morelink\" href=\"newcomments?{token}\" rel=\"next\">More</a>"
        ));
    }

    html.push_str("</table></body></html>");
    html
}

/// Build a page of `count` numbered comments for pagination tests
pub fn numbered_page(page_no: u32, count: usize, next_token: Option<&str>) -> String {
    let users: Vec<String> = (0..count).map(|i| format!("user_{page_no}_{i}")).collect();
    let comments: Vec<String> = (0..count)
        .map(|i| format!("comment {i} on page {page_no}"))
        .collect();
    comment_page(&users, &comments, next_token)
}
