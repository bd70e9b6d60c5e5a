//! Conversion configuration.
//!
//! `ConversionOptions` is built either through the `with_*` builder methods,
//! which validate their input, or leniently from raw values handed over by an
//! external host (`from_raw`, serde). The lenient paths coerce bad values to
//! defaults instead of failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::error::{ConvertError, ConvertResult};

/// Default wrap width in columns
pub const DEFAULT_WIDTH: usize = 70;

/// How hyperlinks are rendered in the plain-text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// Keep the link text, drop the URL
    None,
    /// `text [url]`
    #[default]
    Inline,
    /// `text` followed by `[url]` on the next line
    Nextline,
    /// `text [n]` plus a numbered list of URLs after the text
    Table,
    /// `[url=...]text[/url]`
    Bbcode,
}

impl LinkMode {
    pub const ALL: [LinkMode; 5] = [
        LinkMode::None,
        LinkMode::Inline,
        LinkMode::Nextline,
        LinkMode::Table,
        LinkMode::Bbcode,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LinkMode::None => "none",
            LinkMode::Inline => "inline",
            LinkMode::Nextline => "nextline",
            LinkMode::Table => "table",
            LinkMode::Bbcode => "bbcode",
        }
    }

    /// Lenient parse used for override markers and host configuration.
    ///
    /// Unknown names render like `inline`.
    #[must_use]
    pub fn from_marker(name: &str) -> Self {
        match name.parse() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::debug!("{}, falling back to inline", e);
                LinkMode::Inline
            }
        }
    }
}

impl FromStr for LinkMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        LinkMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ConvertError::UnknownLinkMode(s.to_string()))
    }
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration options for HTML to text conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Link rendering strategy (default: inline)
    #[serde(deserialize_with = "lenient_link_mode")]
    pub link_mode: LinkMode,

    /// Maximum line width in columns (default: 70)
    ///
    /// `0` disables word wrapping entirely.
    #[serde(deserialize_with = "lenient_width")]
    pub width: usize,

    /// Base URL for resolving relative links (default: None)
    ///
    /// Relative links are resolved by plain concatenation:
    /// - Base: "https://example.com"
    /// - "/foo" → "https://example.com/foo"
    /// - "foo" → "https://example.com/foo"
    /// - "https://other.com" → "https://other.com" (preserved as-is)
    pub base_url: Option<String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            link_mode: LinkMode::Inline,
            width: DEFAULT_WIDTH,
            base_url: None,
        }
    }
}

impl ConversionOptions {
    /// Create a new `ConversionOptions` with the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults without word wrapping
    #[must_use]
    pub fn unwrapped() -> Self {
        Self {
            width: 0,
            ..Self::default()
        }
    }

    /// Build options from raw host values, coercing anything invalid.
    ///
    /// Unknown link modes become `inline`, negative widths become `0`.
    #[must_use]
    pub fn from_raw(link_mode: &str, width: i64) -> Self {
        Self {
            link_mode: LinkMode::from_marker(link_mode),
            width: coerce_width(width),
            base_url: None,
        }
    }

    #[must_use]
    pub fn with_link_mode(mut self, link_mode: LinkMode) -> Self {
        self.link_mode = link_mode;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the base URL used for relative links.
    ///
    /// An empty string clears the base URL. Trailing slashes are dropped so
    /// that `/path` links do not produce a double slash.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InvalidBaseUrl` if the value is not an absolute
    /// URL that can serve as a base.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> ConvertResult<Self> {
        let raw = base_url.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            self.base_url = None;
            return Ok(self);
        }

        match Url::parse(trimmed) {
            Ok(parsed) if !parsed.cannot_be_a_base() => {
                self.base_url = Some(trimmed.trim_end_matches('/').to_string());
                Ok(self)
            }
            Ok(_) => Err(ConvertError::InvalidBaseUrl {
                url: raw.clone(),
                reason: "URL cannot be a base".to_string(),
            }),
            Err(e) => Err(ConvertError::InvalidBaseUrl {
                url: raw.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Base URL prefix for relative links, empty when unset
    #[must_use]
    pub fn link_base(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or("")
    }
}

fn coerce_width(width: i64) -> usize {
    if width <= 0 {
        if width < 0 {
            tracing::debug!("Negative width {} coerced to 0 (no wrapping)", width);
        }
        return 0;
    }
    usize::try_from(width).unwrap_or(usize::MAX)
}

fn lenient_link_mode<'de, D>(deserializer: D) -> Result<LinkMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|name| LinkMode::from_marker(&name)).unwrap_or_default())
}

fn lenient_width<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.map_or(DEFAULT_WIDTH, coerce_width))
}
