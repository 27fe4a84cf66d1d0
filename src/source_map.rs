//! Platform account name to publisher label mapping.
//!
//! Video platforms attribute a page to the uploading channel rather than the
//! publisher behind it. When the channel is one we know, the resolver swaps
//! the host-derived `source` for the publisher's name.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Selector for the channel owner link on YouTube watch pages.
pub const YOUTUBE_CHANNEL_SELECTOR: &str = ".yt-user-info a";

/// Channel display name -> canonical source label.
static SOURCE_MAPPINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Acme Channel", "Acme Channel"),
        ("AcmeVideo", "Acme Channel"),
        ("Associated Press", "AP"),
        ("AT&T", "AT&T"),
        ("BBC News", "BBC News"),
        ("Bloomberg Television", "Bloomberg"),
        ("Bloomberg Quicktake", "Bloomberg"),
        ("CNN", "CNN"),
        ("CNBC Television", "CNBC"),
        ("FRONTLINE PBS | Official", "PBS"),
        ("Financial Times", "Financial Times"),
        ("Forbes", "Forbes"),
        ("Guardian News", "The Guardian"),
        ("National Geographic", "National Geographic"),
        ("NBC News", "NBC News"),
        ("PBS NewsHour", "PBS"),
        ("Reuters", "Reuters"),
        ("TED", "TED"),
        ("TEDx Talks", "TED"),
        ("The Economist", "The Economist"),
        ("The New York Times", "The New York Times"),
        ("The Verge", "The Verge"),
        ("The Wall Street Journal", "The Wall Street Journal"),
        ("VICE", "VICE"),
        ("VICE News", "VICE"),
        ("Vox", "Vox"),
        ("Washington Post", "The Washington Post"),
        ("WIRED", "WIRED"),
    ])
});

/// Look up the canonical source label for a platform account name.
///
/// Surrounding whitespace in `signal` is ignored; the match is otherwise
/// exact. Returns `None` when the name is not in the table.
#[must_use]
pub fn map_source(signal: &str) -> Option<&'static str> {
    SOURCE_MAPPINGS.get(signal.trim()).copied()
}
