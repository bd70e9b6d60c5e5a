//! Blockquote flattening.
//!
//! Each outermost `<blockquote>` region is converted on its own (recursively,
//! so nested quotes come back already prefixed), every resulting line gets a
//! `> ` citation prefix, and the block is spliced back as escaped `<pre>`
//! content so the rest of the pipeline keeps it verbatim.
//!
//! Nesting deeper than [`MAX_QUOTE_DEPTH`] is not extracted; those tags are
//! removed by the tag stripper and their text stays in the innermost quote.

use html_escape::encode_double_quoted_attribute;
use regex::Regex;
use std::sync::LazyLock;

use crate::text_converter::link_handler::LinkHandler;
use crate::text_converter::render;

/// Opening and closing blockquote tags
static BLOCKQUOTE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</*blockquote[^>]*>").expect("BLOCKQUOTE_TAG regex is valid")
});

/// Columns taken by the `> ` prefix
const QUOTE_PREFIX_WIDTH: usize = 2;

/// Quote levels rendered with their own prefix
pub const MAX_QUOTE_DEPTH: usize = 32;

/// Replace every balanced outermost `<blockquote>` region with quoted text.
///
/// A closing tag without an open region is ignored. An unclosed region is
/// left in place for the tag stripper. `quote_depth` is the number of quote
/// levels already around `text`.
pub fn flatten_blockquotes(
    text: &str,
    width: usize,
    quote_depth: usize,
    links: &mut LinkHandler,
) -> String {
    if quote_depth >= MAX_QUOTE_DEPTH {
        if BLOCKQUOTE_TAG.is_match(text) {
            tracing::debug!(
                "Blockquotes nested deeper than {} levels, leaving them to the tag stripper",
                MAX_QUOTE_DEPTH
            );
        }
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    let mut depth = 0usize;
    let mut region_start = 0;
    let mut body_start = 0;
    let mut flattened = 0usize;

    for tag in BLOCKQUOTE_TAG.find_iter(text) {
        let is_close = tag.as_str().as_bytes().get(1) == Some(&b'/');

        if !is_close {
            if depth == 0 {
                region_start = tag.start();
                body_start = tag.end();
            }
            depth += 1;
            continue;
        }

        if depth == 0 {
            tracing::debug!("Unbalanced </blockquote> at byte {}, skipping", tag.start());
            continue;
        }

        depth -= 1;
        if depth > 0 {
            continue;
        }

        result.push_str(&text[copied..region_start]);
        let body = &text[body_start..tag.start()];
        result.push_str(&quote_block(body, width, quote_depth + 1, links));
        copied = tag.end();
        flattened += 1;
    }

    result.push_str(&text[copied..]);

    if flattened > 0 {
        tracing::debug!("Flattened {} blockquote region(s) at width {}", flattened, width);
    }
    result
}

/// Convert a blockquote body and wrap it as an escaped `<pre>` block
fn quote_block(body: &str, width: usize, quote_depth: usize, links: &mut LinkHandler) -> String {
    let inner_width = width.saturating_sub(QUOTE_PREFIX_WIDTH);
    let rendered = render(body.trim_ascii(), inner_width, quote_depth, links);
    let rendered = rendered.trim_ascii();

    // An empty quote still leaves its citation mark
    let quoted = if rendered.is_empty() {
        "> ".to_string()
    } else {
        rendered
            .lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("<pre>{}</pre>", encode_double_quoted_attribute(&quoted))
}
