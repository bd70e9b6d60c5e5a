//! Markup-aware uppercasing for headings, bold text and table headers.

use html_escape::{decode_html_entities, encode_double_quoted_attribute};
use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG: hardcoded regex is valid"));

/// Uppercase the text between tags, leaving the tags themselves untouched.
///
/// A text run that starts with `<` (an unterminated tag) is left as is.
#[must_use]
pub fn uppercase_outside_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut last = 0;

    for tag in TAG.find_iter(html) {
        push_text_run(&mut result, &html[last..tag.start()]);
        result.push_str(tag.as_str());
        last = tag.end();
    }
    push_text_run(&mut result, &html[last..]);

    result
}

fn push_text_run(out: &mut String, run: &str) {
    if run.is_empty() || run.starts_with('<') {
        out.push_str(run);
        return;
    }
    out.push_str(&uppercase_text(run));
}

/// Decode entities, uppercase, then re-escape so the text stays valid markup
fn uppercase_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    let upper = decoded.to_uppercase();
    encode_double_quoted_attribute(&upper).into_owned()
}
