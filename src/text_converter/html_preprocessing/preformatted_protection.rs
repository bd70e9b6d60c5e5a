//! Preformatted block protection
//!
//! Protects `<pre>` blocks from the whitespace flattening of the bulk table.
//! Inside each block, line breaks become `<br>` and spaces/tabs become
//! `&nbsp;`, which later stages turn back into real line breaks and hard
//! spaces instead of collapsing them.
//!
//! Example transformation:
//! ```text
//! <pre>a  b
//! c</pre>
//! ↓
//! <div><br>a&nbsp;&nbsp;b<br>c<br></div>
//! ```

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::text_converter::link_handler::LinkHandler;
use crate::text_converter::tag_rewriting::apply_callback_patterns;

/// One tab is rendered as this many hard spaces
const TAB_AS_SPACES: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

/// Regex to match <pre> blocks, non-greedy so sibling blocks stay separate
static PRE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<pre[^>]*>(.*?)</pre>").expect("PRE_BLOCK regex is valid")
});

static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\b[^>]*>").expect("BR_TAG regex is valid"));

/// Stray pre tags left inside a block's content
static PRE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<pre[^>]*>|</pre>").expect("PRE_TAG regex is valid"));

/// Replace every `<pre>` block with its whitespace-protected form.
///
/// Blocks are processed left to right; text produced for one block is never
/// rescanned, so malformed nesting cannot loop.
pub fn protect_preformatted(text: &str, links: &mut LinkHandler) -> String {
    let mut blocks = 0usize;

    let result = PRE_BLOCK
        .replace_all(text, |caps: &Captures| {
            blocks += 1;
            protect_block(&caps[1], links)
        })
        .into_owned();

    if blocks > 0 {
        tracing::trace!("Protected {} preformatted block(s)", blocks);
    }
    result
}

/// Transform the content of one `<pre>` block.
fn protect_block(content: &str, links: &mut LinkHandler) -> String {
    // <br> must become a newline before the callback table eats the
    // whitespace that follows it
    let workspace = BR_TAG.replace_all(content, "\n");
    let workspace = apply_callback_patterns(&workspace, links);

    let workspace = workspace
        .replace('\n', "<br>")
        .replace('\t', TAB_AS_SPACES)
        .replace(' ', "&nbsp;");
    let workspace = PRE_TAG.replace_all(&workspace, "");

    format!("<div><br>{workspace}<br></div>")
}
