//! Tag vocabulary loaded from configuration.

use std::collections::{BTreeMap, BTreeSet};

use figurelab_core::clip::Clip;
use figurelab_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Allowed tag values, grouped by style and then by category.
///
/// ```yaml
/// salsa:
///   hold: [open-hold, closed-hold, cross-hold]
///   position: [side-by-side, facing]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagTaxonomy(BTreeMap<String, BTreeMap<String, Vec<String>>>);

impl TagTaxonomy {
    /// Parses a taxonomy from YAML.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the document is not a
    /// style → category → tag-list mapping.
    pub fn from_yaml_str(source: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(source)
            .map_err(|e| DomainError::Validation(format!("invalid tag taxonomy: {e}")))
    }

    /// Styles with a declared vocabulary.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Categories declared for a style; empty for unknown styles.
    #[must_use]
    pub fn categories(&self, style: &str) -> Vec<&str> {
        self.0
            .get(style)
            .map(|categories| categories.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Tags declared for a style and category; empty if either is unknown.
    #[must_use]
    pub fn tags(&self, style: &str, category: &str) -> &[String] {
        self.0
            .get(style)
            .and_then(|categories| categories.get(category))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if `tag` is declared in any category of `style`.
    #[must_use]
    pub fn is_known(&self, style: &str, tag: &str) -> bool {
        self.0.get(style).is_some_and(|categories| {
            categories
                .values()
                .any(|tags| tags.iter().any(|t| t == tag))
        })
    }

    /// Tags carried by `clip` (initial or final) that the vocabulary for
    /// `style` does not declare, sorted and de-duplicated.
    #[must_use]
    pub fn unknown_tags<'a>(&self, style: &str, clip: &'a Clip) -> Vec<&'a str> {
        clip.tags_initial
            .iter()
            .chain(clip.tags_final.iter())
            .filter(|tag| !self.is_known(style, tag))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
