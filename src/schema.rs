//! Field schema registry.
//!
//! Each content type declared through `og:type` maps to a fixed list of
//! output fields. The resolver starts from an empty record built from that
//! list and may only assign values to fields already in it.

use serde::Serialize;

use crate::record::MetadataRecord;

// ============================================================
// FIELD NAMES
// ============================================================

/// Fields the resolver derives itself, present in every schema.
pub const DERIVED_FIELDS: &[&str] = &[
    "url",
    "canonical",
    "title",
    "image",
    "author",
    "description",
    "source",
];

/// Open Graph, Twitter card and generic fields present in every schema.
pub const PASSTHROUGH_FIELDS: &[&str] = &[
    "og:url",
    "og:locale",
    "og:locale:alternate",
    "og:title",
    "og:type",
    "og:description",
    "og:determiner",
    "og:site_name",
    "og:image",
    "og:image:secure_url",
    "og:image:type",
    "og:image:width",
    "og:image:height",
    "twitter:title",
    "twitter:description",
    "twitter:image",
    "twitter:image:alt",
    "twitter:card",
    "twitter:site",
    "twitter:site:id",
    "twitter:url",
    "twitter:account_id",
    "twitter:creator",
    "twitter:creator:id",
    "keywords",
    "robots",
    "theme-color",
];

/// Extra fields for `og:type = article`.
pub const ARTICLE_FIELDS: &[&str] = &[
    "article:published_time",
    "article:modified_time",
    "article:expiration_time",
    "article:author",
    "article:section",
    "article:tag",
    "og:article:published_time",
    "og:article:modified_time",
    "og:article:expiration_time",
    "og:article:author",
    "og:article:section",
    "og:article:tag",
];

/// Extra fields for `og:type = video` and `video.*`.
pub const VIDEO_FIELDS: &[&str] = &[
    "og:video",
    "og:video:url",
    "og:video:secure_url",
    "og:video:type",
    "og:video:width",
    "og:video:height",
    "video:actor",
    "video:actor:role",
    "video:director",
    "video:writer",
    "video:duration",
    "video:release_date",
    "video:tag",
    "video:series",
];

/// Extra fields for `og:type = music` and `music.*`.
pub const MUSIC_FIELDS: &[&str] = &[
    "og:audio",
    "og:audio:secure_url",
    "og:audio:type",
    "music:duration",
    "music:album",
    "music:album:disc",
    "music:album:track",
    "music:musician",
    "music:song",
    "music:release_date",
    "music:creator",
];

/// Extra fields for `og:type = book`.
pub const BOOK_FIELDS: &[&str] = &["book:author", "book:isbn", "book:release_date", "book:tag"];

/// Extra fields for `og:type = profile`.
pub const PROFILE_FIELDS: &[&str] = &[
    "profile:first_name",
    "profile:last_name",
    "profile:username",
    "profile:gender",
];

// ============================================================
// CONTENT TYPES
// ============================================================

/// Content type declared by a page's `og:type` tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTypeVariant {
    /// `website`, or any absent or unrecognized type.
    #[default]
    Website,
    /// `article`
    Article,
    /// `video`, `video.movie`, `video.episode`, `video.tv_show`, `video.other`
    Video,
    /// `music`, `music.song`, `music.album`, `music.playlist`, `music.radio_station`
    Music,
    /// `book`
    Book,
    /// `profile`
    Profile,
}

impl ContentTypeVariant {
    /// Classify a raw `og:type` value.
    ///
    /// Matching ignores case and surrounding whitespace. Anything not
    /// recognized, including `None`, is [`ContentTypeVariant::Website`].
    #[must_use]
    pub fn from_og_type(og_type: Option<&str>) -> Self {
        let Some(raw) = og_type else {
            return Self::Website;
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "article" => Self::Article,
            "video" | "video.movie" | "video.episode" | "video.tv_show" | "video.other" => {
                Self::Video
            }
            "music" | "music.song" | "music.album" | "music.playlist" | "music.radio_station" => {
                Self::Music
            }
            "book" => Self::Book,
            "profile" => Self::Profile,
            _ => Self::Website,
        }
    }

    /// Fields this type adds on top of the shared base set.
    #[must_use]
    pub fn extra_fields(self) -> &'static [&'static str] {
        match self {
            Self::Website => &[],
            Self::Article => ARTICLE_FIELDS,
            Self::Video => VIDEO_FIELDS,
            Self::Music => MUSIC_FIELDS,
            Self::Book => BOOK_FIELDS,
            Self::Profile => PROFILE_FIELDS,
        }
    }

    /// Complete ordered field list for this type.
    pub fn fields(self) -> impl Iterator<Item = &'static str> {
        DERIVED_FIELDS
            .iter()
            .chain(PASSTHROUGH_FIELDS)
            .chain(self.extra_fields())
            .copied()
    }
}

/// Build the empty, sealed record for a content type.
#[must_use]
pub fn empty_record(variant: ContentTypeVariant) -> MetadataRecord {
    MetadataRecord::sealed(variant, variant.fields())
}

/// Build the empty, sealed record for a raw `og:type` value.
#[must_use]
pub fn record_for_og_type(og_type: Option<&str>) -> MetadataRecord {
    empty_record(ContentTypeVariant::from_og_type(og_type))
}
