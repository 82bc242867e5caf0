//! The clip ("figure") model supplied by the video corpus.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tags::TagSet;

/// Opaque unique identifier of a clip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(String);

impl ClipId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClipId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ClipId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single tagged video clip representing one dance figure.
///
/// Fields the engine does not interpret (thumbnail, duration, storage
/// paths...) are kept verbatim in `payload` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    /// Unique identifier.
    pub id: ClipId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Grouping category (dance style).
    #[serde(default)]
    pub style: String,
    /// How the figure begins.
    #[serde(default)]
    pub tags_initial: TagSet,
    /// How the figure ends.
    #[serde(default)]
    pub tags_final: TagSet,
    /// Opaque display metadata.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl Clip {
    /// Creates a clip with no tags and no payload.
    #[must_use]
    pub fn new(id: impl Into<ClipId>, title: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            style: style.into(),
            tags_initial: TagSet::new(),
            tags_final: TagSet::new(),
            payload: serde_json::Map::new(),
        }
    }

    /// Replaces the initial tags.
    #[must_use]
    pub fn with_initial_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags_initial = tags.into_iter().collect();
        self
    }

    /// Replaces the final tags.
    #[must_use]
    pub fn with_final_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags_final = tags.into_iter().collect();
        self
    }

    /// Attaches an opaque payload field.
    #[must_use]
    pub fn with_payload(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }
}
