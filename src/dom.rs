//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate covering what metadata parsing
//! needs from a document: attribute reads, text reads and first-match lookup.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, treating an empty value as absent
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name).filter(|value| !value.is_empty())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Lookup ===

/// First element in document order matching `selector`.
///
/// Invalid selectors match nothing.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let matches = doc.try_select(selector)?;
    matches.nodes().first().map(|node| Selection::from(*node))
}

/// Text of the first element matching `selector`, if it has any non-blank text.
#[must_use]
pub fn first_text(doc: &Document, selector: &str) -> Option<String> {
    let elem = first_match(doc, selector)?;
    let text = text_content(&elem);
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_read_attributes() {
        let doc = parse(r#"<meta name="author" content="">"#);
        let meta = doc.select("meta");

        assert_eq!(get_attribute(&meta, "name").as_deref(), Some("author"));
        assert_eq!(get_attribute(&meta, "content").as_deref(), Some(""));
        assert!(non_empty_attribute(&meta, "content").is_none());
        assert!(get_attribute(&meta, "property").is_none());
    }

    #[test]
    fn test_first_match_picks_document_order() {
        let doc = parse("<div><p>one</p><p>two</p></div>");
        let first = first_match(&doc, "p");

        assert!(first.is_some());
        assert_eq!(first.map(|p| text_content(&p).to_string()).as_deref(), Some("one"));
    }

    #[test]
    fn test_first_match_missing_or_invalid() {
        let doc = parse("<div>text</div>");

        assert!(first_match(&doc, "span").is_none());
        assert!(first_match(&doc, "p[[[").is_none());
    }

    #[test]
    fn test_first_text_skips_blank() {
        let doc = parse("<html><head><title>  </title></head><body></body></html>");
        assert!(first_text(&doc, "title").is_none());

        let doc = parse("<html><head><title>Page</title></head><body></body></html>");
        assert_eq!(first_text(&doc, "title").as_deref(), Some("Page"));
    }
}
