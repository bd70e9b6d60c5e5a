//! Text cleanup after the markup has been rewritten.
//!
//! Stages, in pipeline order:
//! 1. `strip_tags` - remove the remaining tags and comments
//! 2. `normalize_entities` - decode character references
//! 3. `normalize_blank_lines` - collapse blank lines, trim leading breaks
//! 4. `wrap_text` - greedy wrap to the target width
//! 5. `restore_hard_spaces` - hard spaces become plain spaces

mod entity_normalization;
mod tag_stripping;
mod whitespace_normalization;
mod word_wrap;

pub use entity_normalization::normalize_entities;
pub use tag_stripping::strip_tags;
pub use whitespace_normalization::{normalize_blank_lines, restore_hard_spaces};
pub use word_wrap::wrap_text;
