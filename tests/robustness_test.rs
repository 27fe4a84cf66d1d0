use page_metadata::{parse_default, Document, Error, Options};
use std::time::{Duration, Instant};

const PAGE_URL: &str = "https://example.com/";

#[test]
fn parse_does_not_panic_on_malformed_html_unclosed_tags() {
    let html = "<head><meta property=\"og:title\" content=\"Unclosed\"<title>t";
    let result = parse_default(PAGE_URL, html);
    assert!(result.is_ok());
}

#[test]
fn parse_does_not_panic_on_broken_attributes() {
    let html = "<meta name=\"description content=broken>";
    let metadata = parse_default(PAGE_URL, html).expect("parse failed");
    assert_eq!(metadata.description(), "");
}

#[test]
fn parse_handles_empty_document() {
    let metadata = parse_default(PAGE_URL, "").expect("parse failed");

    assert_eq!(metadata.url(), PAGE_URL);
    assert_eq!(metadata.source(), "example.com");
    assert_eq!(metadata.title(), "");
}

#[test]
fn meta_tags_in_body_are_collected() {
    let html = r#"<html><body><meta name="author" content="Body Author"></body></html>"#;
    let metadata = parse_default(PAGE_URL, html).expect("parse failed");
    assert_eq!(metadata.author(), "Body Author");
}

#[test]
fn invalid_url_is_reported_before_parsing() {
    for url in ["", "not a url", "https://", "mailto:someone@example.com"] {
        let result = parse_default(url, "<title>x</title>");
        assert!(matches!(result, Err(Error::InvalidUrl(_))), "{url:?} should be rejected");
    }
}

#[test]
fn invalid_signal_selector_is_ignored() {
    let options = Options {
        source_signal_selector: Some("div[[[".to_string()),
        ..Options::default()
    };
    let metadata =
        page_metadata::parse(PAGE_URL, "<div>x</div>", &options).expect("parse failed");
    assert_eq!(metadata.source(), "example.com");
}

#[test]
fn parse_document_reuses_parsed_tree() {
    let doc = Document::from(r#"<meta property="og:site_name" content="Example News">"#);

    let first = page_metadata::parse_document(PAGE_URL, &doc, &Options::default())
        .expect("parse failed");
    let second = page_metadata::parse_document("https://mirror.example.org/a", &doc, &Options::default())
        .expect("parse failed");

    assert_eq!(first.get("og:site_name"), Some("Example News"));
    assert_eq!(second.get("og:site_name"), Some("Example News"));
    assert_eq!(second.source(), "mirror.example.org");
}

#[test]
fn parse_large_document_completes_quickly() {
    let mut html = String::from("<html><head>");
    for i in 0..2_000 {
        html.push_str(&format!(r#"<meta name="custom-{i}" content="value {i}">"#));
    }
    html.push_str("<title>Big</title></head><body>");
    html.push_str(&"<p>filler text</p>".repeat(5_000));
    html.push_str("</body></html>");

    let start = Instant::now();
    let metadata = parse_default(PAGE_URL, &html).expect("parse failed");

    assert_eq!(metadata.title(), "Big");
    assert!(start.elapsed() < Duration::from_secs(10));
}
