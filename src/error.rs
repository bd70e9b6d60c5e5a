//! Error types for conversion configuration
//!
//! The conversion itself never fails: malformed markup degrades into imperfect
//! text instead of an error. These errors are only raised while validating
//! configuration supplied by a caller.

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error types for conversion configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Link mode name is not one of the supported modes
    #[error("Unknown link mode '{0}' (expected none, inline, nextline, table or bbcode)")]
    UnknownLinkMode(String),

    /// Base URL cannot be used to resolve relative links
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ConvertError {
    /// Check if the error came from link mode parsing
    #[must_use]
    pub fn is_link_mode(&self) -> bool {
        matches!(self, ConvertError::UnknownLinkMode(_))
    }
}
