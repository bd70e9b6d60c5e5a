//! Tag rewrites whose replacement has to be computed.
//!
//! Every rule captures the tag name as `tag` and the element content as
//! `body`; `rewrite_tag` dispatches on the lower-cased tag name. The anchor
//! rule needs a back-reference to match the closing quote of `href`, so the
//! table is compiled with `fancy_regex`.

use fancy_regex::{Captures, Regex};
use std::sync::LazyLock;

use super::uppercase::uppercase_outside_tags;
use crate::text_converter::link_handler::LinkHandler;
use crate::text_converter::options::LinkMode;

/// Class prefix that forces a link mode for a single anchor
pub const LINK_MODE_MARKER: &str = "_html2text_link_";

/// (name, pattern) pairs, applied in order over the whole text
pub const CALLBACK_PATTERNS: &[(&str, &str)] = &[
    ("heading", r"(?i)<(?P<tag>h)[1-6](?: [^>]*)?>(?P<body>.*?)</h[1-6]>"),
    // Paragraphs absorb the spaces around them
    ("paragraph", r"(?si)[ ]*<(?P<tag>p)(?: [^>]*)?>(?P<body>.*?)</p>[ ]*"),
    ("line_break", r"(?i)<(?P<tag>br)[^>]*>[ ]*"),
    ("bold", r"(?i)<(?P<tag>b)(?: [^>]*)?>(?P<body>.*?)</b>"),
    ("strong", r"(?i)<(?P<tag>strong)(?: [^>]*)?>(?P<body>.*?)</strong>"),
    ("table_header", r"(?i)<(?P<tag>th)(?: [^>]*)?>(?P<body>.*?)</th>"),
    (
        "anchor",
        concat!(
            r#"(?i)<(?P<tag>a) [^>]*href=(?P<quote>["'])(?P<url>[^"']+)\k<quote>"#,
            r"(?P<attrs>[^>]*)>(?P<body>.*?)</a>",
        ),
    ),
];

struct CallbackRule {
    name: &'static str,
    pattern: Regex,
}

static CALLBACK_RULES: LazyLock<Vec<CallbackRule>> = LazyLock::new(|| {
    CALLBACK_PATTERNS
        .iter()
        .map(|&(name, pattern)| CallbackRule {
            name,
            pattern: Regex::new(pattern).expect("CALLBACK_PATTERNS: hardcoded regex is valid"),
        })
        .collect()
});

static LINK_MODE_OVERRIDE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"_html2text_link_(\w+)")
        .expect("LINK_MODE_OVERRIDE: hardcoded regex is valid")
});

/// Apply the callback table, rendering anchors through `links`
pub fn apply_callback_patterns(text: &str, links: &mut LinkHandler) -> String {
    let mut result = text.to_string();
    for rule in CALLBACK_RULES.iter() {
        result = replace_captures(rule, &result, |caps| rewrite_tag(caps, links));
    }
    result
}

/// `replace_all` that never panics.
///
/// If the backtracking engine gives up (e.g. backtrack limit), the rest of
/// the text is passed through unchanged.
fn replace_captures<F>(rule: &CallbackRule, text: &str, mut rewrite: F) -> String
where
    F: FnMut(&Captures<'_>) -> String,
{
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for caps in rule.pattern.captures_iter(text) {
        let caps = match caps {
            Ok(caps) => caps,
            Err(e) => {
                tracing::warn!(
                    "Callback rule '{}' aborted: {}, keeping remaining text",
                    rule.name,
                    e
                );
                break;
            }
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        result.push_str(&text[last..whole.start()]);
        result.push_str(&rewrite(&caps));
        last = whole.end();
    }

    result.push_str(&text[last..]);
    result
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn rewrite_tag(caps: &Captures<'_>, links: &mut LinkHandler) -> String {
    let tag = group(caps, "tag").to_ascii_lowercase();
    let body = group(caps, "body");

    match tag.as_str() {
        "h" => uppercase_outside_tags(&format!("\n\n{body}\n\n")),
        "p" => format!("\n{}\n", body.replace('\n', " ").trim_ascii()),
        "br" => "\n".to_string(),
        "b" | "strong" => uppercase_outside_tags(body),
        "th" => uppercase_outside_tags(&format!("\t\t{body}\n")),
        "a" => rewrite_anchor(caps, links),
        _ => String::new(),
    }
}

fn rewrite_anchor(caps: &Captures<'_>, links: &mut LinkHandler) -> String {
    let mode_override = LINK_MODE_OVERRIDE
        .captures(group(caps, "attrs"))
        .and_then(|marker| marker.get(1))
        .map(|mode| LinkMode::from_marker(mode.as_str()));

    // Broken markup sometimes splits URLs with spaces
    let url = group(caps, "url").replace(' ', "");

    links.build(&url, group(caps, "body"), mode_override)
}
