//! Character encoding detection for raw HTML bytes.
//!
//! Pages fetched by the caller arrive as bytes in whatever charset the server
//! used. The declared charset is sniffed from the document head and the
//! bytes are decoded to UTF-8 before meta tags are read.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252, X_USER_DEFINED};
use regex::Regex;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the declared encoding of an HTML document.
///
/// Checks `<meta charset>` then `<meta http-equiv="Content-Type">` within
/// the first 1024 bytes. Unknown labels and missing declarations give UTF-8.
///
/// A meta tag can only be read if the bytes are ASCII-compatible, so a
/// declared UTF-16 is taken as UTF-8 and `x-user-defined` as windows-1252.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    let declared = [&*META_CHARSET, &*HTTP_EQUIV_CHARSET]
        .into_iter()
        .filter_map(|re| re.captures(&head).and_then(|c| c.get(1)))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8);

    if declared == UTF_16LE || declared == UTF_16BE {
        UTF_8
    } else if declared == X_USER_DEFINED {
        WINDOWS_1252
    } else {
        declared
    }
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use page_metadata::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced malformed {} sequences while decoding", used.name());
    }
    decoded.into_owned()
}
