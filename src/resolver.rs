//! Metadata resolution.
//!
//! Turns a parsed document into a [`MetadataRecord`]:
//! 1. Source host from the page URL (the only step that can fail)
//! 2. Schema selection from `og:type`
//! 3. Per-field fill from meta tags, with sanitizers
//! 4. Derived fields: url, title, source, image, author, description, canonical

use dom_query::Document;

use crate::dom;
use crate::error::Result;
use crate::record::MetadataRecord;
use crate::sanitize::{self, clean_title_string, ensure_secure_image_request, truncate};
use crate::schema;
use crate::source_map;
use crate::tags::RawTagMap;
use crate::url_utils;
use crate::Options;

/// Resolve page metadata from an already parsed document.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidUrl`] when `url` has no `scheme://host`
/// structure. No record is produced in that case.
pub fn resolve(url: &str, doc: &Document, options: &Options) -> Result<MetadataRecord> {
    let host = url_utils::source_host(url)?;

    let tags = RawTagMap::collect(doc);
    let mut record = schema::record_for_og_type(tags.get("og:type"));
    log::debug!(
        "resolving {url} as {:?} ({} meta keys)",
        record.content_type(),
        tags.len()
    );

    fill_from_tags(&mut record, &tags, options);

    record.assign("url", sanitize::encode(url, options));
    derive_title(&mut record, doc, options);
    derive_source(&mut record, host, doc, options);
    derive_image(&mut record);
    derive_author(&mut record);
    derive_description(&mut record);
    derive_canonical(&mut record, url, doc, &tags, options);

    Ok(record)
}

/// Copy every schema field present in the tag map, sanitized and encoded.
fn fill_from_tags(record: &mut MetadataRecord, tags: &RawTagMap, options: &Options) {
    let keys: Vec<&'static str> = record.keys().collect();

    for key in keys {
        let Some(raw) = tags.get(key) else {
            continue;
        };

        let value = sanitize_field(key, raw, options);
        if !value.is_empty() {
            record.assign(key, sanitize::encode(&value, options));
        }
    }
}

/// Field-specific cleanup applied before encoding.
fn sanitize_field(key: &str, raw: &str, options: &Options) -> String {
    match key {
        "description" | "og:description" => truncate(raw, options.description_length),
        "og:title" => clean_title_string(raw),
        "og:image" | "og:image:secure_url" if options.ensure_secure_image_request => {
            ensure_secure_image_request(raw)
        }
        _ => raw.to_string(),
    }
}

/// `og:title`, else the document `<title>`, else whatever the fill step left.
fn derive_title(record: &mut MetadataRecord, doc: &Document, options: &Options) {
    let og_title = record.value("og:title");
    if !og_title.is_empty() {
        let title = og_title.to_string();
        record.assign("title", title);
        return;
    }

    if let Some(text) = dom::first_text(doc, "title") {
        let cleaned = clean_title_string(&text);
        if !cleaned.is_empty() {
            record.assign("title", sanitize::encode(&cleaned, options));
        }
    }
}

/// Host of the page URL, replaced by a mapped publisher label when the page
/// carries a known platform account name.
fn derive_source(record: &mut MetadataRecord, host: &str, doc: &Document, options: &Options) {
    record.assign("source", sanitize::encode(host, options));

    let Some(selector) = options.source_signal_selector.as_deref() else {
        return;
    };
    let Some(signal) = dom::first_text(doc, selector) else {
        return;
    };

    match source_map::map_source(&signal) {
        Some(label) => {
            log::debug!("source {host:?} overridden by {label:?} from platform signal");
            record.assign("source", sanitize::encode(label, options));
        }
        None => log::trace!("no source mapping for {:?}", signal.trim()),
    }
}

/// `og:image:secure_url`, then `og:image`, else empty.
fn derive_image(record: &mut MetadataRecord) {
    let image = first_non_empty(record, &["og:image:secure_url", "og:image"]);
    record.assign("image", image);
}

/// Keep a filled `author`; otherwise fall back to the article author tags.
fn derive_author(record: &mut MetadataRecord) {
    if record.value("author").is_empty() {
        let author = first_non_empty(record, &["article:author", "og:article:author"]);
        record.assign("author", author);
    }
}

/// Keep a filled `description`; otherwise fall back to `og:description`.
fn derive_description(record: &mut MetadataRecord) {
    if record.value("description").is_empty() {
        let description = first_non_empty(record, &["og:description"]);
        record.assign("description", description);
    }
}

/// `<link rel="canonical">`, then `og:url`, each resolved against the page
/// URL, then the page URL itself.
fn derive_canonical(
    record: &mut MetadataRecord,
    url: &str,
    doc: &Document,
    tags: &RawTagMap,
    options: &Options,
) {
    let linked = dom::first_match(doc, "link[rel='canonical']")
        .and_then(|link| dom::get_attribute(&link, "href"))
        .and_then(|href| url_utils::resolve_href(&href, url));

    let canonical = linked
        .or_else(|| tags.get("og:url").and_then(|og_url| url_utils::resolve_href(og_url, url)))
        .unwrap_or_else(|| url.to_string());

    record.assign("canonical", sanitize::encode(&canonical, options));
}

/// First non-empty value among `keys`, already encoded, or `""`.
fn first_non_empty(record: &MetadataRecord, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| record.value(key))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}
