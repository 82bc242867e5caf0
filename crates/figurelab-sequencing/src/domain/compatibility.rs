//! Directional compatibility between clips.

use figurelab_core::clip::Clip;

/// Returns `true` if `next` may directly follow `prev`.
///
/// Holds iff some tag `prev` ends in is also a tag `next` starts in. The
/// relation is directional: `is_compatible(a, b)` says nothing about
/// `is_compatible(b, a)`.
#[must_use]
pub fn is_compatible(prev: &Clip, next: &Clip) -> bool {
    prev.tags_final.intersects(&next.tags_initial)
}

/// Returns the index of every clip in `items` that is not compatible with
/// the clip after it.
///
/// An index `i` in the result marks a broken transition `items[i] -> items[i + 1]`.
#[must_use]
pub fn incompatible_transitions(items: &[Clip]) -> Vec<usize> {
    items
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| !is_compatible(&pair[0], &pair[1]))
        .map(|(i, _)| i)
        .collect()
}
