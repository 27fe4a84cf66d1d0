//! # page-metadata
//!
//! Normalized page metadata from HTML documents.
//!
//! Pages describe themselves through several overlapping conventions: Open
//! Graph `property` tags, generic `<meta name>` tags, the `<title>` element
//! and platform-specific markup. This library reconciles them into one flat
//! record whose fields depend on the page's declared `og:type`.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_metadata::{parse, Options};
//!
//! let html = r#"<html><head>
//!   <title>Fallback Title</title>
//!   <meta property="og:title" content="My Article">
//!   <meta property="og:image" content="https://example.com/cover.png">
//! </head><body></body></html>"#;
//!
//! let metadata = parse("https://example.com/posts/1", html, &Options::default())?;
//! assert_eq!(metadata.title(), "My Article");
//! assert_eq!(metadata.source(), "example.com");
//! assert_eq!(metadata.image(), "https://example.com/cover.png");
//! # Ok::<(), page_metadata::Error>(())
//! ```
//!
//! ## Field Precedence
//!
//! - **title**: `og:title`, then the `<title>` element
//! - **image**: `og:image:secure_url`, then `og:image`
//! - **author**: `<meta name="author">`, then `article:author`, then `og:article:author`
//! - **description**: `<meta name="description">`, then `og:description`
//! - **source**: a mapped platform channel name, then the page host
//! - **canonical**: `<link rel="canonical">`, then `og:url`, then the page URL

mod error;
mod options;
mod record;
mod resolver;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Field schema registry keyed by `og:type`.
pub mod schema;

/// Pure value sanitizers (truncation, title cleanup, secure URLs, escaping).
pub mod sanitize;

/// Platform account name to publisher label mapping.
pub mod source_map;

/// Meta tag collection.
pub mod tags;

/// URL utilities for host derivation and link resolution.
pub mod url_utils;

// Public API - re-exports
pub use dom_query::Document;
pub use error::{Error, Result};
pub use options::Options;
pub use record::MetadataRecord;
pub use schema::ContentTypeVariant;
pub use tags::RawTagMap;

/// Parses page metadata from an HTML document.
///
/// # Arguments
///
/// * `url` - Absolute URL of the page; its host becomes the default `source`
/// * `html` - The HTML document as a string slice
/// * `options` - Output encoding, truncation and image URL settings
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `url` has no `scheme://host` part.
/// Missing tags never fail; their fields are left empty.
///
/// # Example
///
/// ```rust
/// use page_metadata::{parse, Options};
///
/// let html = "<html><head><title>a < b</title></head></html>";
/// let options = Options {
///     encode_fields: true,
///     ..Options::default()
/// };
/// let metadata = parse("https://example.com/", html, &options)?;
/// assert_eq!(metadata.title(), "a &lt; b");
/// # Ok::<(), page_metadata::Error>(())
/// ```
pub fn parse(url: &str, html: &str, options: &Options) -> Result<MetadataRecord> {
    let document = dom::parse(html);
    resolver::resolve(url, &document, options)
}

/// Parses page metadata using default options.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `url` has no `scheme://host` part.
pub fn parse_default(url: &str, html: &str) -> Result<MetadataRecord> {
    parse(url, html, &Options::default())
}

/// Parses page metadata from HTML bytes with automatic encoding detection.
///
/// The charset is taken from `<meta charset>` or `<meta http-equiv>` in the
/// first 1024 bytes, defaulting to UTF-8. Invalid sequences are replaced
/// with U+FFFD rather than causing errors.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `url` has no `scheme://host` part.
pub fn parse_bytes(url: &str, html: &[u8], options: &Options) -> Result<MetadataRecord> {
    let html = encoding::decode_html(html);
    parse(url, &html, options)
}

/// Parses page metadata from a document the caller already parsed.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `url` has no `scheme://host` part.
pub fn parse_document(url: &str, document: &Document, options: &Options) -> Result<MetadataRecord> {
    resolver::resolve(url, document, options)
}
