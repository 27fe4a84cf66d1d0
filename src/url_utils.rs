//! URL Utility Functions
//!
//! Host derivation for the `source` field and relative link resolution for
//! the canonical URL.

use url::Url;

use crate::error::{Error, Result};

/// Separator between scheme and authority.
const SCHEME_SEPARATOR: &str = "://";

/// Extract the host portion of an absolute URL.
///
/// The host is everything between `://` and the first `/`, `?` or `#`, so a
/// port or user-info segment is kept verbatim. A URL with no path at all
/// (`https://example.com`) yields the bare host.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `url` has no `://` or nothing follows it.
///
/// # Example
///
/// ```rust
/// use page_metadata::url_utils::source_host;
///
/// assert_eq!(source_host("https://example.com/page")?, "example.com");
/// assert_eq!(source_host("https://example.com")?, "example.com");
/// assert!(source_host("example.com/page").is_err());
/// # Ok::<(), page_metadata::Error>(())
/// ```
pub fn source_host(url: &str) -> Result<&str> {
    let Some((_, rest)) = url.split_once(SCHEME_SEPARATOR) else {
        return Err(Error::InvalidUrl(url.to_string()));
    };

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let host = &rest[..end];

    if host.is_empty() {
        return Err(Error::InvalidUrl(url.to_string()));
    }

    Ok(host)
}

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Resolve an `href` against the page URL.
///
/// Absolute http(s) links are returned as written. Relative links are joined
/// onto `base`; when `base` itself cannot be parsed the link is dropped.
#[must_use]
pub fn resolve_href(href: &str, base: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let (is_abs, _) = is_absolute_url(href);
    if is_abs {
        return Some(href.to_string());
    }

    let base = Url::parse(base).ok()?;
    base.join(href).ok().map(|resolved| resolved.to_string())
}
