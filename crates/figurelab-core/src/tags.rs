//! Tag sets attached to the start and end of a clip.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// An ordered set of tag labels.
///
/// An empty set matches nothing; there is no wildcard tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `tag` is in the set.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Returns `true` if the two sets share at least one tag.
    #[must_use]
    pub fn intersects(&self, other: &TagSet) -> bool {
        // Probe the smaller set against the larger one.
        let (small, large) = if self.0.len() <= other.0.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };
        small.iter().any(|tag| large.contains(tag))
    }

    /// Returns the tags present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &TagSet) -> TagSet {
        TagSet(self.0.intersection(&other.0).cloned().collect())
    }

    /// Returns `true` if every tag in `tags` is in the set.
    pub fn contains_all<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().all(|tag| self.contains(tag))
    }

    /// Returns `true` if at least one tag in `tags` is in the set.
    pub fn contains_any<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().any(|tag| self.contains(tag))
    }

    /// Adds a tag, returning `true` if it was not already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Returns `true` if the set has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        TagSet(iter.into_iter().map(Into::into).collect())
    }
}

// Stored documents sometimes carry `null` where the list was never written.
impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = Option::<BTreeSet<String>>::deserialize(deserializer)?;
        Ok(TagSet(tags.unwrap_or_default()))
    }
}
