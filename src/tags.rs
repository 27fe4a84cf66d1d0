//! Meta tag collection.
//!
//! Flattens every `<meta>` element of a document into a single key/value map
//! keyed by the tag's `name` and/or `property` attribute.

use std::collections::HashMap;

use dom_query::{Document, Selection};

use crate::dom;

/// Raw `<meta>` values keyed by `name` or `property` attribute.
///
/// Built once per document by [`RawTagMap::collect`]; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTagMap {
    tags: HashMap<String, String>,
}

impl RawTagMap {
    /// Collect meta tags from a parsed document.
    ///
    /// A tag with a non-empty `content` is recorded under its `name` and,
    /// independently, under its `property`. On key collision the tag that
    /// appears later in the document wins. Tags without `content`, or
    /// without either key attribute, are skipped.
    #[must_use]
    pub fn collect(doc: &Document) -> Self {
        let mut tags = HashMap::new();

        for node in doc.select("meta").nodes() {
            let meta = Selection::from(*node);

            let Some(content) = dom::non_empty_attribute(&meta, "content") else {
                continue;
            };

            if let Some(name) = dom::non_empty_attribute(&meta, "name") {
                tags.insert(name, content.clone());
            }
            if let Some(property) = dom::non_empty_attribute(&meta, "property") {
                tags.insert(property, content);
            }
        }

        log::trace!("collected {} meta tag keys", tags.len());
        Self { tags }
    }

    /// Raw value for `key`, if a tag carried it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when the document had no usable meta tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawTagMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_name_and_property() {
        let html = r#"<!DOCTYPE html>
        <html>
        <head>
            <meta name="description" content="A test page.">
            <meta property="og:title" content="OG Title">
            <meta name="twitter:card" content="summary">
        </head>
        <body></body>
        </html>"#;

        let tags = RawTagMap::collect(&Document::from(html));

        assert_eq!(tags.len(), 3);
        assert_eq!(tags.get("description"), Some("A test page."));
        assert_eq!(tags.get("og:title"), Some("OG Title"));
        assert_eq!(tags.get("twitter:card"), Some("summary"));
    }

    #[test]
    fn test_tag_with_both_attributes_records_both_keys() {
        let html = r#"<meta name="title" property="og:title" content="Shared">"#;
        let tags = RawTagMap::collect(&Document::from(html));

        assert_eq!(tags.get("title"), Some("Shared"));
        assert_eq!(tags.get("og:title"), Some("Shared"));
    }

    #[test]
    fn test_last_tag_wins() {
        let html = r#"
            <meta property="og:image" content="https://example.com/first.png">
            <meta property="og:image" content="https://example.com/second.png">
        "#;
        let tags = RawTagMap::collect(&Document::from(html));

        assert_eq!(tags.get("og:image"), Some("https://example.com/second.png"));
    }

    #[test]
    fn test_skips_incomplete_tags() {
        let html = r#"
            <meta charset="utf-8">
            <meta name="author" content="">
            <meta property="og:title">
            <meta content="orphan">
            <meta http-equiv="refresh" content="5">
        "#;
        let tags = RawTagMap::collect(&Document::from(html));

        assert!(tags.is_empty());
    }

    #[test]
    fn test_empty_content_does_not_erase_earlier_value() {
        let html = r#"
            <meta name="author" content="Jane Doe">
            <meta name="author" content="">
        "#;
        let tags = RawTagMap::collect(&Document::from(html));

        assert_eq!(tags.get("author"), Some("Jane Doe"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let html = r#"<meta name="Description" content="Upper">"#;
        let tags = RawTagMap::collect(&Document::from(html));

        assert_eq!(tags.get("Description"), Some("Upper"));
        assert_eq!(tags.get("description"), None);
    }

    #[test]
    fn test_from_iterator() {
        let tags: RawTagMap = [("og:type", "video")].into_iter().collect();
        assert_eq!(tags.get("og:type"), Some("video"));
    }
}
