//! Character reference cleanup.
//!
//! Runs after tag stripping, in this order:
//! 1. Legacy numeric references that decode to C1 controls are mapped to the
//!    characters Windows-1252 mail clients meant (`&#153;`, `&#151;`)
//! 2. Escaped ampersands are parked behind a sentinel so that `&amp;lt;`
//!    ends up as the literal text `&lt;`
//! 3. Runs of ASCII spaces collapse to one (hard spaces are not touched)
//! 4. Every standard reference is decoded
//! 5. Whatever still looks like a reference is deleted
//! 6. The sentinel becomes a bare `&`

use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder for an escaped ampersand while references are decoded
const AMPERSAND_SENTINEL: &str = "|+|amp|+|";

const ENTITY_PATTERNS: &[(&str, &str)] = &[
    (r"(?i)&#153;", "\u{2122}"),
    (r"(?i)&#151;", "\u{2014}"),
    (r"(?i)&(?:amp|#38);", AMPERSAND_SENTINEL),
    (r"[ ]{2,}", " "),
];

static ENTITY_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ENTITY_PATTERNS
        .iter()
        .map(|&(pattern, replacement)| {
            let re = Regex::new(pattern).expect("ENTITY_PATTERNS: hardcoded regex is valid");
            (re, replacement)
        })
        .collect()
});

/// Reference-shaped leftovers: names up to 32 characters, decimal up to
/// 7 digits, hex up to 6 digits
static UNRESOLVED_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[a-zA-Z][a-zA-Z0-9]{1,31}|#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6});")
        .expect("UNRESOLVED_ENTITY: hardcoded regex is valid")
});

/// Decode character references and drop the ones that cannot be decoded
#[must_use]
pub fn normalize_entities(text: &str) -> String {
    let mut result = text.to_string();
    for (re, replacement) in ENTITY_RULES.iter() {
        result = re.replace_all(&result, *replacement).into_owned();
    }

    let decoded = decode_html_entities(&result);
    let cleaned = UNRESOLVED_ENTITY.replace_all(&decoded, "");

    cleaned.replace(AMPERSAND_SENTINEL, "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_entities_decoded() {
        assert_eq!(
            normalize_entities("&lt;tag&gt; &quot;q&quot; caf&eacute; &#65;&#x42;"),
            "<tag> \"q\" café AB"
        );
    }

    #[test]
    fn test_escaped_ampersand_stays_literal() {
        assert_eq!(normalize_entities("A&amp;B"), "A&B");
        assert_eq!(normalize_entities("&amp;lt; &#38;gt;"), "&lt; &gt;");
    }

    #[test]
    fn test_unknown_entities_deleted() {
        assert_eq!(normalize_entities("A&amp;B &unknownxyz; C"), "A&B  C");
        assert_eq!(normalize_entities("x&bogusname;y&zzz9;z"), "xyz");
    }

    #[test]
    fn test_legacy_references() {
        assert_eq!(normalize_entities("Brand&#153; &#151; more"), "Brand\u{2122} \u{2014} more");
    }

    #[test]
    fn test_spaces_collapse_before_decoding() {
        assert_eq!(normalize_entities("a    b"), "a b");
        assert_eq!(normalize_entities("a&nbsp;&nbsp;b"), "a\u{a0}\u{a0}b");
    }

    #[test]
    fn test_bare_ampersand_kept() {
        assert_eq!(normalize_entities("fish & chips && more"), "fish & chips && more");
    }
}
