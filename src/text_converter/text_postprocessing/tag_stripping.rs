//! Removal of the markup left after the rewrite tables.

use regex::Regex;
use std::sync::LazyLock;

static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->").expect("HTML_COMMENT: hardcoded regex is valid")
});

/// Start tags, end tags, doctypes and processing instructions.
///
/// A `<` followed by anything else (`a < b`, `<3`) is text, not markup.
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[A-Za-z/!?][^>]*>").expect("HTML_TAG: hardcoded regex is valid")
});

/// Strip comments and tags, keeping the text between them
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let without_comments = HTML_COMMENT.replace_all(text, "");
    HTML_TAG.replace_all(&without_comments, "").into_owned()
}
