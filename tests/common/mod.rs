//! Test utilities and helper functions for the html2text test suite

use kodegen_tools_html2text::{convert, ConversionOptions, LinkMode};
use tracing_subscriber::EnvFilter;

/// Base URL used by the link tests
#[allow(dead_code)]
pub const BASE_URL: &str = "https://example.com";

/// Install a test-writer subscriber, honouring `RUST_LOG`
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates an HTML email document with the given subject and body
#[allow(dead_code)]
pub fn create_email_html(subject: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <style>body {{ font-family: sans-serif; }}</style>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(subject),
        body
    )
}

/// Convert with default options
#[allow(dead_code)]
pub fn to_text(html: &str) -> String {
    init_tracing();
    convert(html, &ConversionOptions::default())
}

/// Convert with the given link mode against [`BASE_URL`]
#[allow(dead_code)]
pub fn to_text_with_links(html: &str, mode: LinkMode) -> String {
    init_tracing();
    let options = ConversionOptions::new()
        .with_link_mode(mode)
        .with_base_url(BASE_URL)
        .expect("BASE_URL is a valid base");
    convert(html, &options)
}

/// Convert with the given wrap width
#[allow(dead_code)]
pub fn to_text_with_width(html: &str, width: usize) -> String {
    init_tracing();
    convert(html, &ConversionOptions::new().with_width(width))
}
