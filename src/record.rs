//! Sealed metadata record.
//!
//! A `MetadataRecord` is created with its full key set by the schema
//! registry and never gains or loses keys afterwards. Only the resolver can
//! assign values; callers get read access.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::schema::ContentTypeVariant;

/// Flat page metadata with a fixed key set.
///
/// Keys iterate, and serialize, in schema order. Unfilled fields hold an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    content_type: ContentTypeVariant,
    fields: Vec<(&'static str, String)>,
}

impl MetadataRecord {
    /// Create an empty record whose key set is exactly `keys`.
    pub(crate) fn sealed<I>(content_type: ContentTypeVariant, keys: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            content_type,
            fields: keys.into_iter().map(|key| (key, String::new())).collect(),
        }
    }

    /// Assign a value to an existing field.
    ///
    /// Returns `false`, leaving the record unchanged, when `key` is not part
    /// of the schema.
    pub(crate) fn assign(&mut self, key: &str, value: String) -> bool {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
            true
        } else {
            log::debug!("rejected write to field {key:?} outside the {:?} schema", self.content_type);
            false
        }
    }

    /// Value of `key`, or `""` when unfilled or not in the schema.
    pub(crate) fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Value of `key`, or `None` when the schema has no such field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the schema includes `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| *k == key)
    }

    /// Content type the schema was selected for.
    #[must_use]
    pub fn content_type(&self) -> ContentTypeVariant {
        self.content_type
    }

    /// Field names in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(k, _)| *k)
    }

    /// `(field, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of fields in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false` for records built by the schema registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // Convenience accessors for the derived fields every schema carries.

    /// Page URL as given by the caller.
    #[must_use]
    pub fn url(&self) -> &str {
        self.value("url")
    }

    /// Canonical page URL.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.value("canonical")
    }

    /// Resolved title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.value("title")
    }

    /// Publisher label or host name.
    #[must_use]
    pub fn source(&self) -> &str {
        self.value("source")
    }

    /// Preferred image URL.
    #[must_use]
    pub fn image(&self) -> &str {
        self.value("image")
    }

    /// Resolved author.
    #[must_use]
    pub fn author(&self) -> &str {
        self.value("author")
    }

    /// Resolved description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.value("description")
    }

    /// Serialize to a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialize`] if `serde_json` fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
