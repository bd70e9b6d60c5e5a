//! HTML preprocessing before the rewrite tables run.
//!
//! This module isolates the regions whose layout must survive whitespace
//! flattening:
//! - Blockquotes, converted recursively and citation-prefixed
//! - Preformatted blocks, with whitespace transposed to `<br>`/`&nbsp;`

pub mod blockquote_flattening;
pub mod preformatted_protection;

pub use blockquote_flattening::{flatten_blockquotes, MAX_QUOTE_DEPTH};
pub use preformatted_protection::protect_preformatted;
