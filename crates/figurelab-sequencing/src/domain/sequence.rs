//! The working sequence a user edits in the builder.

use figurelab_core::clip::{Clip, ClipId};
use figurelab_core::config::AppendPolicy;
use figurelab_core::error::DomainError;
use tracing::debug;

use super::compatibility::is_compatible;

/// Partial update of a sequence's free-text metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataUpdate {
    /// New name, if changing.
    pub name: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
}

/// An ordered, user-curated list of clips plus its metadata.
///
/// The same clip may appear more than once. Each editing session owns
/// exactly one `Sequence`; dropping it discards the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    items: Vec<Clip>,
    name: String,
    description: String,
    style: String,
}

impl Sequence {
    /// Creates an empty sequence for a style.
    #[must_use]
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            name: String::new(),
            description: String::new(),
            style: style.into(),
        }
    }

    /// Assembles a sequence from already-resolved parts.
    #[must_use]
    pub fn from_parts(
        style: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        items: Vec<Clip>,
    ) -> Self {
        Self {
            items,
            name: name.into(),
            description: description.into(),
            style: style.into(),
        }
    }

    /// The clips in order.
    #[must_use]
    pub fn items(&self) -> &[Clip] {
        &self.items
    }

    /// Sequence name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sequence description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Style fixed at creation.
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The last item, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Clip> {
        self.items.last()
    }

    /// Returns `true` if a clip with this id is in the sequence.
    #[must_use]
    pub fn contains(&self, id: &ClipId) -> bool {
        self.items.iter().any(|c| &c.id == id)
    }

    /// The ordered clip ids.
    #[must_use]
    pub fn clip_ids(&self) -> Vec<ClipId> {
        self.items.iter().map(|c| c.id.clone()).collect()
    }

    /// Appends a clip unconditionally.
    ///
    /// Compatibility is advisory; use [`Sequence::try_append`] to enforce it.
    pub fn append(&mut self, clip: Clip) {
        self.items.push(clip);
    }

    /// Appends a clip if `policy` permits it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateClip` if duplicates are disallowed and
    /// the clip is already present, or `DomainError::IncompatibleTransition`
    /// if incompatible transitions are disallowed and the current last item
    /// cannot be followed by `clip`. The sequence is unchanged on error.
    pub fn try_append(&mut self, clip: Clip, policy: &AppendPolicy) -> Result<(), DomainError> {
        if !policy.allow_duplicates && self.contains(&clip.id) {
            return Err(DomainError::DuplicateClip(clip.id));
        }
        if !policy.allow_incompatible
            && let Some(last) = self.last()
            && !is_compatible(last, &clip)
        {
            return Err(DomainError::IncompatibleTransition {
                from: last.id.clone(),
                to: clip.id,
            });
        }
        self.items.push(clip);
        Ok(())
    }

    /// Removes and returns the item at `index`, shifting later items down.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IndexOutOfRange` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Clip, DomainError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Moves the item at `from` so that it ends up at `to`.
    ///
    /// The item is removed first and then inserted at `to` in the shortened
    /// list, so moving index 0 to 2 in `[A, B, C, D]` gives `[B, C, A, D]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IndexOutOfRange` if either index is `>= len`.
    /// The sequence is unchanged on error.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let clip = self.items.remove(from);
            self.items.insert(to, clip);
        }
        Ok(())
    }

    /// Empties the sequence and resets its name and description.
    pub fn clear(&mut self) {
        debug!(style = %self.style, removed = self.items.len(), "clearing sequence draft");
        self.items.clear();
        self.name.clear();
        self.description.clear();
    }

    /// Applies a partial metadata update; items are untouched.
    pub fn set_metadata(&mut self, update: MetadataUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }

    /// Replaces every item, keeping metadata.
    pub(crate) fn replace_items(&mut self, items: Vec<Clip>) {
        self.items = items;
    }

    fn check_index(&self, index: usize) -> Result<(), DomainError> {
        if index >= self.items.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}
