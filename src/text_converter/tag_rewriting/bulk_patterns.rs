//! Fixed markup → text substitutions.
//!
//! The table is applied top to bottom, each pattern over the whole text.
//! Order matters: newlines are flattened before any tag inserts its own line
//! breaks, and paired `<li>…</li>` must run before the bare `<li>` fallback.

use regex::Regex;
use std::sync::LazyLock;

/// Marker class for spans that are dropped from the text output
pub const IGNORE_CLASS: &str = "_html2text_ignore";

/// (pattern, replacement) pairs, replacements use `regex` expansion syntax
pub const BULK_PATTERNS: &[(&str, &str)] = &[
    // Carriage returns
    (r"\r", ""),
    // Source newlines and tabs carry no meaning in HTML
    (r"[\n\t]+", " "),
    (r"(?i)<head\b[^>]*>.*?</head>", ""),
    (r"(?i)<script\b[^>]*>.*?</script>", ""),
    (r"(?i)<style\b[^>]*>.*?</style>", ""),
    (r"(?i)<i\b[^>]*>(.*?)</i>", "_${1}_"),
    (r"(?i)<em\b[^>]*>(.*?)</em>", "_${1}_"),
    (r"(?i)(?:<ul\b[^>]*>|</ul>)", "\n\n"),
    (r"(?i)(?:<ol\b[^>]*>|</ol>)", "\n\n"),
    (r"(?i)(?:<dl\b[^>]*>|</dl>)", "\n\n"),
    (r"(?i)<li\b[^>]*>(.*?)</li>", "\t* ${1}\n"),
    (r"(?i)<dd\b[^>]*>(.*?)</dd>", " ${1}\n"),
    (r"(?i)<dt\b[^>]*>(.*?)</dt>", "\t* ${1}"),
    // <li> without a closing tag
    (r"(?i)<li\b[^>]*>", "\n\t* "),
    (r"(?i)<hr\b[^>]*>", "\n-------------------------\n"),
    (r"(?i)<div\b[^>]*>", "<div>\n"),
    (r"(?i)(?:<table\b[^>]*>|</table>)", "\n\n"),
    (r"(?i)(?:<tr\b[^>]*>|</tr>)", "\n"),
    (r"(?i)<td\b[^>]*>(.*?)</td>", "\t\t${1}\n"),
    (r#"(?i)<span class="_html2text_ignore">.+?</span>"#, ""),
    // Images are replaced by their alt text
    (r#"(?i)<img\b[^>]*alt="([^>"]+)"[^>]*>"#, "[${1}]"),
];

static BULK_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    BULK_PATTERNS
        .iter()
        .map(|&(pattern, replacement)| {
            let re = Regex::new(pattern).expect("BULK_PATTERNS: hardcoded regex is valid");
            (re, replacement)
        })
        .collect()
});

/// Apply the bulk substitution table
#[must_use]
pub fn apply_bulk_patterns(text: &str) -> String {
    let mut result = text.to_string();
    for (re, replacement) in BULK_RULES.iter() {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    result
}
