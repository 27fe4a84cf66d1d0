//! Configuration options for metadata parsing.
//!
//! The `Options` struct controls output encoding, description truncation,
//! image URL coercion and the platform source lookup.

use crate::sanitize::DEFAULT_DESCRIPTION_LENGTH;
use crate::source_map::YOUTUBE_CHANNEL_SELECTOR;

/// Configuration options for metadata parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use page_metadata::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     encode_fields: true,
///     description_length: 280,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// HTML-escape every output value (`&`, `<`, `>`, `"`, `'`).
    ///
    /// Default: `false`
    pub encode_fields: bool,

    /// Maximum length, in characters, of `description` and `og:description`.
    ///
    /// Longer values are cut and end in `...`, the marker counting toward
    /// the budget.
    ///
    /// Default: `750`
    pub description_length: usize,

    /// Rewrite insecure `og:image` / `og:image:secure_url` values to `https`.
    ///
    /// Scheme-relative URLs (`//cdn.example.com/a.png`) are also pinned to
    /// `https`. Coercion runs before encoding.
    ///
    /// Default: `false`
    pub ensure_secure_image_request: bool,

    /// CSS selector for the element carrying a platform account name.
    ///
    /// The first match's text is looked up in the source mapping table and,
    /// when mapped, replaces the host-derived `source`. `None` disables the
    /// lookup.
    ///
    /// Default: `Some(".yt-user-info a")`
    pub source_signal_selector: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            encode_fields: false,
            description_length: DEFAULT_DESCRIPTION_LENGTH,
            ensure_secure_image_request: false,
            source_signal_selector: Some(YOUTUBE_CHANNEL_SELECTOR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(!opts.encode_fields);
        assert_eq!(opts.description_length, 750);
        assert!(!opts.ensure_secure_image_request);
        assert_eq!(opts.source_signal_selector.as_deref(), Some(".yt-user-info a"));
    }

    #[test]
    fn test_boolean_options_can_be_toggled() {
        let opts = Options {
            encode_fields: true,
            ensure_secure_image_request: true,
            source_signal_selector: None,
            ..Options::default()
        };

        assert!(opts.encode_fields);
        assert!(opts.ensure_secure_image_request);
        assert!(opts.source_signal_selector.is_none());
        assert_eq!(opts.description_length, 750);
    }
}
