//! Conversion is total: arbitrary input never panics and always yields text

use kodegen_tools_html2text::{convert, ConversionOptions, HtmlToText, LinkMode};
use proptest::prelude::*;

/// Tags and references that exercise every rewrite table
const TOKENS: &[&str] = &[
    "<p>",
    "</p>",
    "<blockquote>",
    "</blockquote>",
    "<pre>",
    "</pre>",
    "<br>",
    "<b>",
    "</b>",
    "<h2>",
    "</h2>",
    "<ul>",
    "<li>",
    "</li>",
    "<td>",
    "<th>",
    "</th>",
    "<a href=\"/x\">",
    "<a href='mailto:a@b.c' class=\"_html2text_link_table\">",
    "</a>",
    "&amp;",
    "&nbsp;",
    "&bogus;",
    "<!--",
    "-->",
];

/// Markup-heavy fragments mixing known tokens with random text
fn html_fragment() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        3 => prop::sample::select(TOKENS).prop_map(|t| t.to_string()),
        1 => "[a-zA-Z0-9 \t\n<>&;\"'=/#é日]{0,12}",
    ];
    prop::collection::vec(token, 0..40).prop_map(|tokens| tokens.concat())
}

fn any_link_mode() -> impl Strategy<Value = LinkMode> {
    prop::sample::select(LinkMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_arbitrary_text_never_panics(html in any::<String>(), width in 0usize..100) {
        let options = ConversionOptions::new().with_width(width);
        let _ = convert(&html, &options);
    }

    #[test]
    fn prop_markup_never_panics(
        html in html_fragment(),
        mode in any_link_mode(),
        width in 0usize..80,
    ) {
        let options = ConversionOptions::new()
            .with_link_mode(mode)
            .with_width(width)
            .with_base_url("https://example.com")
            .expect("valid base URL");
        let doc = HtmlToText::new(html, options);
        let first = doc.text().to_string();
        prop_assert_eq!(doc.text(), first.as_str());
    }

    #[test]
    fn prop_output_has_no_leading_line_break(html in html_fragment(), width in 0usize..80) {
        let options = ConversionOptions::new().with_width(width);
        let text = convert(&html, &options);
        let body = text.split("\n\nLinks:\n------\n").next().unwrap_or_default();
        prop_assert!(!body.starts_with('\n'), "leading break in {:?}", text);
    }

    #[test]
    fn prop_plain_words_survive(words in prop::collection::vec("[a-z]{1,10}", 1..20)) {
        let html = words.join(" ");
        let text = convert(&html, &ConversionOptions::unwrapped());
        prop_assert_eq!(text, html);
    }
}
