//! Link rendering and collection.
//!
//! `LinkHandler` turns an anchor's URL and display text into plain text
//! according to the active `LinkMode`. In table mode it collects the resolved
//! URLs into a `LinkTable`, which is rendered as a numbered appendix after the
//! converted text.

use regex::Regex;
use std::sync::LazyLock;

use super::options::LinkMode;

/// Link targets that are never converted: scripts, mail addresses, fragments
static IGNORED_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:javascript:|mailto:|#)").expect("IGNORED_LINK: hardcoded regex is valid")
});

/// A scheme prefix marks an absolute URL
static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z][a-z0-9.+-]+:").expect("SCHEME_PREFIX: hardcoded regex is valid")
});

/// Ordered, deduplicated list of URLs referenced as `[n]` in the text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable {
    urls: Vec<String>,
}

impl LinkTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a URL and return its 1-based index.
    ///
    /// A URL that is already present keeps its original index.
    pub fn insert(&mut self, url: &str) -> usize {
        if let Some(pos) = self.urls.iter().position(|known| known == url) {
            return pos + 1;
        }
        self.urls.push(url.to_string());
        self.urls.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// URLs in insertion order
    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Render the `Links:` appendix, or an empty string when no links were collected
    #[must_use]
    pub fn render_appendix(&self) -> String {
        if self.urls.is_empty() {
            return String::new();
        }

        let mut appendix = String::from("\n\nLinks:\n------\n");
        for (i, url) in self.urls.iter().enumerate() {
            appendix.push_str(&format!("[{}] {}\n", i + 1, url));
        }
        appendix
    }
}

/// Renders anchors for one conversion and owns its link table
#[derive(Debug, Clone)]
pub struct LinkHandler {
    base_url: String,
    mode: LinkMode,
    table: LinkTable,
}

impl LinkHandler {
    pub fn new(base_url: impl Into<String>, mode: LinkMode) -> Self {
        Self {
            base_url: base_url.into(),
            mode,
            table: LinkTable::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> LinkMode {
        self.mode
    }

    #[must_use]
    pub fn table(&self) -> &LinkTable {
        &self.table
    }

    #[must_use]
    pub fn into_table(self) -> LinkTable {
        self.table
    }

    /// Resolve a link against the base URL.
    ///
    /// Links with a scheme are returned unchanged; anything else is appended
    /// to the base URL with a `/` separator unless it already starts with one.
    #[must_use]
    pub fn resolve(&self, link: &str) -> String {
        if SCHEME_PREFIX.is_match(link) {
            return link.to_string();
        }

        let mut url = self.base_url.clone();
        if !link.starts_with('/') {
            url.push('/');
        }
        url.push_str(link);
        url
    }

    /// Render a link as plain text.
    ///
    /// `mode_override` replaces the configured mode for this one link.
    pub fn build(&mut self, link: &str, display: &str, mode_override: Option<LinkMode>) -> String {
        let mode = mode_override.unwrap_or(self.mode);
        if mode == LinkMode::None || IGNORED_LINK.is_match(link) {
            return display.to_string();
        }

        let url = self.resolve(link);

        match mode {
            LinkMode::Table => {
                let index = self.table.insert(&url);
                format!("{display} [{index}]")
            }
            LinkMode::Nextline if url == display => display.to_string(),
            LinkMode::Nextline => format!("{display}\n[{url}]"),
            LinkMode::Bbcode => format!("[url={url}]{display}[/url]"),
            LinkMode::Inline | LinkMode::None if url == display => display.to_string(),
            LinkMode::Inline | LinkMode::None => format!("{display} [{url}]"),
        }
    }
}
