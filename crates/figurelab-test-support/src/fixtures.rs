//! Clip fixtures.

use figurelab_core::clip::Clip;

/// Builds a clip with the given id and tag sets. The title mirrors the id
/// and the style is `"test"`.
#[must_use]
pub fn clip(id: &str, initial: &[&str], last: &[&str]) -> Clip {
    Clip::new(id, id, "test")
        .with_initial_tags(initial.iter().copied())
        .with_final_tags(last.iter().copied())
}
