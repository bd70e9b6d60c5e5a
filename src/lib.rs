//! HTML to plain-text conversion for the `text/plain` part of HTML email.
//!
//! ```rust
//! use kodegen_tools_html2text::{ConversionOptions, HtmlToText, LinkMode};
//!
//! let options = ConversionOptions::new().with_link_mode(LinkMode::Nextline);
//! let doc = HtmlToText::new(r#"<p>Read <a href="https://kodegen.ai">the docs</a></p>"#, options);
//! assert_eq!(doc.text(), "Read the docs\n[https://kodegen.ai]\n");
//! ```

pub mod error;
pub mod text_converter;

pub use error::{ConvertError, ConvertResult};
pub use text_converter::{
    convert, ConversionOptions, HtmlToText, LinkHandler, LinkMode, LinkTable, DEFAULT_WIDTH,
};
