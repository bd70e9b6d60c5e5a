//! Markup → text rewriting tables.
//!
//! Two ordered tables turn the tags that carry meaning in plain text into
//! text layout:
//! 1. `bulk_patterns` - fixed substitutions (lists, tables, rules, emphasis, images)
//! 2. `callback_patterns` - computed rewrites (headings, paragraphs, bold, links)

mod bulk_patterns;
mod callback_patterns;
mod uppercase;

pub use bulk_patterns::{apply_bulk_patterns, BULK_PATTERNS, IGNORE_CLASS};
pub use callback_patterns::{apply_callback_patterns, CALLBACK_PATTERNS, LINK_MODE_MARKER};
pub use uppercase::uppercase_outside_tags;
