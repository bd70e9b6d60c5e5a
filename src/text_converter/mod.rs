//! HTML to plain-text conversion pipeline
//!
//! Produces the `text/plain` alternative of an HTML email, laid out roughly
//! the way a text-mode browser would render it:
//! 1. Flatten blockquotes (recursive, `> ` prefixed)
//! 2. Protect `<pre>` whitespace from flattening
//! 3. Apply the bulk substitution table (lists, tables, rules, emphasis)
//! 4. Apply the callback table (headings, paragraphs, bold, links)
//! 5. Strip remaining tags, decode entities, normalize blank lines
//! 6. Word wrap, then turn hard spaces back into spaces
//! 7. Append the numbered link list (table link mode only)
//!
//! # Usage
//!
//! ```rust
//! # use kodegen_tools_html2text::text_converter::{convert, ConversionOptions};
//! let text = convert("<h1>Title</h1><p>Some text</p>", &ConversionOptions::default());
//! assert_eq!(text, "TITLE\n\nSome text\n");
//! ```
//!
//! ## Collecting links
//! ```rust
//! # use kodegen_tools_html2text::text_converter::{convert, ConversionOptions, LinkMode};
//! let options = ConversionOptions::new()
//!     .with_link_mode(LinkMode::Table)
//!     .with_base_url("https://example.com")?;
//! let text = convert(r#"<a href="/foo">click</a>"#, &options);
//! assert_eq!(text, "click [1]\n\nLinks:\n------\n[1] https://example.com/foo\n");
//! # Ok::<(), kodegen_tools_html2text::ConvertError>(())
//! ```

use std::cell::OnceCell;

pub mod html_preprocessing;
pub mod link_handler;
pub mod options;
pub mod tag_rewriting;
pub mod text_postprocessing;

pub use link_handler::{LinkHandler, LinkTable};
pub use options::{ConversionOptions, LinkMode, DEFAULT_WIDTH};

use html_preprocessing::{flatten_blockquotes, protect_preformatted};
use tag_rewriting::{apply_bulk_patterns, apply_callback_patterns};
use text_postprocessing::{
    normalize_blank_lines, normalize_entities, restore_hard_spaces, strip_tags, wrap_text,
};

/// Run the conversion stages over one fragment.
///
/// Blockquote bodies re-enter here with a narrower width and `quote_depth`
/// one higher; all levels share the same `links` so table indices are global
/// to the document.
pub(crate) fn render(
    html: &str,
    width: usize,
    quote_depth: usize,
    links: &mut LinkHandler,
) -> String {
    let text = flatten_blockquotes(html, width, quote_depth, links);
    let text = protect_preformatted(&text, links);
    let text = apply_bulk_patterns(&text);
    let text = apply_callback_patterns(&text, links);

    let text = strip_tags(&text);
    let text = normalize_entities(&text);
    let text = normalize_blank_lines(&text);

    let text = wrap_text(&text, width);
    restore_hard_spaces(&text)
}

/// Convert HTML to plain text
///
/// Never fails: malformed markup degrades into imperfect text.
///
/// # Arguments
///
/// * `html` - HTML source, a full document or a fragment
/// * `options` - Link mode, wrap width and base URL
///
/// # Returns
///
/// The plain text, followed by the `Links:` list when links were collected
/// in table mode.
#[must_use]
pub fn convert(html: &str, options: &ConversionOptions) -> String {
    let mut links = LinkHandler::new(options.link_base(), options.link_mode);

    // ASCII whitespace and NUL only; a leading no-break space is content
    let source = html.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'));
    let mut text = render(source, options.width, 0, &mut links);

    let table = links.into_table();
    text.push_str(&table.render_appendix());

    tracing::debug!(
        "Converted {} bytes of HTML to {} bytes of text ({} mode, width {}, {} collected link(s))",
        html.len(),
        text.len(),
        options.link_mode,
        options.width,
        table.len()
    );
    text
}

/// An HTML document and its lazily computed plain-text rendering
///
/// The conversion runs on the first call to [`HtmlToText::text`] and the
/// result is cached for later calls.
#[derive(Debug, Clone)]
pub struct HtmlToText {
    html: String,
    options: ConversionOptions,
    text: OnceCell<String>,
}

impl HtmlToText {
    pub fn new(html: impl Into<String>, options: ConversionOptions) -> Self {
        Self {
            html: html.into(),
            options,
            text: OnceCell::new(),
        }
    }

    /// The HTML source, unchanged
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// The plain-text rendering, converted once and cached
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.get_or_init(|| convert(&self.html, &self.options))
    }
}
