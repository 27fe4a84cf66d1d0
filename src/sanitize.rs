//! Value sanitizers applied to raw tag values before they are stored.
//!
//! Every function here is pure and total: any input yields an output, and
//! none of them allocate more than one string.

use std::sync::LazyLock;

use regex::Regex;

use crate::Options;

/// Default character budget for description fields.
pub const DEFAULT_DESCRIPTION_LENGTH: usize = 750;

/// Marker appended to truncated text.
const ELLIPSIS: &str = "...";

/// Matches any run of whitespace, including newlines and tabs.
#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("valid regex")
});

/// Shorten `text` to at most `max_length` characters.
///
/// Text that already fits is returned unchanged. Otherwise the kept prefix
/// has its trailing whitespace trimmed and `...` appended, the marker counting
/// toward `max_length`. Budgets smaller than the marker keep a bare prefix.
///
/// Lengths are counted in `char`s, so a multibyte character is never split.
///
/// # Example
///
/// ```rust
/// use page_metadata::sanitize::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("a longer sentence", 10), "a long...");
/// ```
#[must_use]
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let marker_len = ELLIPSIS.chars().count();
    if max_length < marker_len {
        return text.chars().take(max_length).collect();
    }

    let kept: String = text.chars().take(max_length - marker_len).collect();
    format!("{}{ELLIPSIS}", kept.trim_end())
}

/// Normalize a human-readable title.
///
/// Collapses whitespace runs (newlines and tabs included) to one space and
/// trims both ends. Applying it twice gives the same result as once.
#[must_use]
pub fn clean_title_string(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Pin an image URL to the `https` scheme.
///
/// `http://` URLs (scheme matched case-insensitively) become `https://`,
/// scheme-relative `//host/...` URLs get an explicit `https:` prefix. Any
/// other value, secure URLs, relative paths and `data:` URIs included, is
/// returned as-is.
#[must_use]
pub fn ensure_secure_image_request(url: &str) -> String {
    const INSECURE: &str = "http://";

    if let Some(scheme) = url.get(..INSECURE.len()) {
        if scheme.eq_ignore_ascii_case(INSECURE) {
            return format!("https://{}", &url[INSECURE.len()..]);
        }
    }

    if url.starts_with("//") {
        return format!("https:{url}");
    }

    url.to_string()
}

/// Escape HTML special characters for safe embedding in markup.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Apply output encoding when `options.encode_fields` is set, identity otherwise.
#[must_use]
pub fn encode(value: &str, options: &Options) -> String {
    if options.encode_fields {
        escape_html(value)
    } else {
        value.to_string()
    }
}
