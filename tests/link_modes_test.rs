//! Link rendering across the five link modes

mod common;

use common::{to_text_with_links, BASE_URL};
use kodegen_tools_html2text::{convert, ConversionOptions, HtmlToText, LinkMode};

const RELATIVE_LINK: &str = r#"<a href="/foo">click</a>"#;

#[test]
fn test_inline_mode() {
    assert_eq!(
        to_text_with_links(RELATIVE_LINK, LinkMode::Inline),
        "click [https://example.com/foo]"
    );
}

#[test]
fn test_nextline_mode() {
    assert_eq!(
        to_text_with_links(RELATIVE_LINK, LinkMode::Nextline),
        "click\n[https://example.com/foo]"
    );
}

#[test]
fn test_bbcode_mode() {
    assert_eq!(
        to_text_with_links(RELATIVE_LINK, LinkMode::Bbcode),
        "[url=https://example.com/foo]click[/url]"
    );
}

#[test]
fn test_none_mode() {
    assert_eq!(to_text_with_links(RELATIVE_LINK, LinkMode::None), "click");
}

#[test]
fn test_table_mode_appends_links() {
    assert_eq!(
        to_text_with_links(RELATIVE_LINK, LinkMode::Table),
        "click [1]\n\nLinks:\n------\n[1] https://example.com/foo\n"
    );
}

#[test]
fn test_table_mode_deduplicates() {
    let html = concat!(
        r#"<p><a href="/a">First</a> <a href="https://other.org/b">Second</a> "#,
        r#"<a href="/a">Again</a></p>"#,
    );
    let text = to_text_with_links(html, LinkMode::Table);
    assert_eq!(
        text,
        concat!(
            "First [1] Second [2] Again [1]\n\n\nLinks:\n------\n",
            "[1] https://example.com/a\n[2] https://other.org/b\n",
        )
    );
}

#[test]
fn test_table_mode_without_links_has_no_appendix() {
    assert_eq!(to_text_with_links("<p>No links here</p>", LinkMode::Table), "No links here\n");
}

#[test]
fn test_ignored_targets_keep_display_text() {
    for html in [
        r#"<a href="javascript:alert(1)">x</a>"#,
        r#"<a href="mailto:someone@example.com">x</a>"#,
        r##"<a href="#top">x</a>"##,
        r#"<a href="JavaScript:void(0)">x</a>"#,
    ] {
        for mode in LinkMode::ALL {
            assert_eq!(to_text_with_links(html, mode), "x", "{html} in {mode} mode");
        }
    }
}

#[test]
fn test_relative_link_without_slash() {
    assert_eq!(
        to_text_with_links(r#"<a href="page.html">Page</a>"#, LinkMode::Inline),
        "Page [https://example.com/page.html]"
    );
}

#[test]
fn test_absolute_link_kept() {
    assert_eq!(
        to_text_with_links(r#"<a href="http://kodegen.ai/docs">Docs</a>"#, LinkMode::Inline),
        "Docs [http://kodegen.ai/docs]"
    );
}

#[test]
fn test_link_text_equal_to_url_not_repeated() {
    let html = r#"<a href="https://kodegen.ai">https://kodegen.ai</a>"#;
    assert_eq!(to_text_with_links(html, LinkMode::Inline), "https://kodegen.ai");
    assert_eq!(to_text_with_links(html, LinkMode::Nextline), "https://kodegen.ai");
}

#[test]
fn test_single_quoted_href() {
    assert_eq!(
        to_text_with_links("<a href='/foo'>click</a>", LinkMode::Inline),
        "click [https://example.com/foo]"
    );
}

#[test]
fn test_bold_link_text() {
    assert_eq!(
        to_text_with_links(r#"<a href="http://x.org"><b>Go</b></a>"#, LinkMode::Inline),
        "GO [http://x.org]"
    );
}

#[test]
fn test_per_link_override() {
    let html = concat!(
        r#"<a href="/x" class="_html2text_link_nextline">X</a> "#,
        r#"<a href="/y" class="_html2text_link_none">Y</a>"#,
    );
    assert_eq!(
        to_text_with_links(html, LinkMode::Inline),
        "X\n[https://example.com/x] Y"
    );
}

#[test]
fn test_per_link_table_override_builds_appendix() {
    let html = r#"<a href="/x" class="_html2text_link_table">X</a>"#;
    assert_eq!(
        to_text_with_links(html, LinkMode::None),
        "X [1]\n\nLinks:\n------\n[1] https://example.com/x\n"
    );
}

#[test]
fn test_unknown_override_falls_back_to_inline() {
    let html = r#"<a href="/x" class="_html2text_link_footnote">X</a>"#;
    assert_eq!(to_text_with_links(html, LinkMode::Bbcode), "X [https://example.com/x]");
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let options = ConversionOptions::new()
        .with_base_url(format!("{BASE_URL}/"))
        .expect("valid base URL");
    assert_eq!(convert(RELATIVE_LINK, &options), "click [https://example.com/foo]");
}

#[test]
fn test_without_base_url() {
    assert_eq!(
        convert(RELATIVE_LINK, &ConversionOptions::default()),
        "click [/foo]"
    );
}

#[test]
fn test_html_to_text_reports_source_and_options() {
    let options = ConversionOptions::new().with_link_mode(LinkMode::Table);
    let doc = HtmlToText::new(RELATIVE_LINK, options.clone());
    assert_eq!(doc.html(), RELATIVE_LINK);
    assert_eq!(doc.options(), &options);
    assert_eq!(doc.text(), "click [1]\n\nLinks:\n------\n[1] /foo\n");
}
