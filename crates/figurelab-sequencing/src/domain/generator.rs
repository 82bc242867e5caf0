//! Random sequence generation by a constrained walk over the corpus.
//!
//! Each step prefers a clip compatible with the current tail. When none is
//! left, the walk falls back to any remaining clip instead of stopping, so a
//! generated sequence reaches `min(target_length, |corpus|)` items but is not
//! guaranteed to be compatible end to end. Clips are drawn without
//! replacement.

use figurelab_core::clip::Clip;
use figurelab_core::rng::DeterministicRng;
use tracing::debug;

use super::compatibility::is_compatible;
use super::sequence::Sequence;

/// Generates up to `target_length` clips from `corpus`.
///
/// Returns an empty vector when the corpus is empty or `target_length` is 0.
#[must_use]
pub fn generate_random(
    corpus: &[Clip],
    target_length: usize,
    rng: &mut dyn DeterministicRng,
) -> Vec<Clip> {
    if corpus.is_empty() || target_length == 0 {
        return Vec::new();
    }

    let mut available: Vec<&Clip> = corpus.iter().collect();
    let mut result: Vec<Clip> = Vec::with_capacity(target_length.min(corpus.len()));

    let seed = available.remove(pick_index(rng, available.len()));
    result.push(seed.clone());

    while result.len() < target_length && !available.is_empty() {
        let Some(tail) = result.last() else {
            break;
        };

        let compatible: Vec<usize> = available
            .iter()
            .enumerate()
            .filter(|(_, c)| is_compatible(tail, c))
            .map(|(i, _)| i)
            .collect();

        let index = if compatible.is_empty() {
            debug!(
                tail = %tail.id,
                remaining = available.len(),
                "no compatible clip left, falling back to any remaining clip"
            );
            pick_index(rng, available.len())
        } else {
            compatible[pick_index(rng, compatible.len())]
        };

        result.push(available.remove(index).clone());
    }

    result
}

/// Replaces the items of `sequence` with a freshly generated run, keeping
/// its name, description and style.
pub fn generate_into(
    sequence: &mut Sequence,
    corpus: &[Clip],
    target_length: usize,
    rng: &mut dyn DeterministicRng,
) {
    let items = generate_random(corpus, target_length, rng);
    debug!(
        style = %sequence.style(),
        requested = target_length,
        generated = items.len(),
        "generated sequence"
    );
    sequence.replace_items(items);
}

/// Uniformly picks an index in `0..len`. `len` must be non-zero.
fn pick_index(rng: &mut dyn DeterministicRng, len: usize) -> usize {
    let last = len - 1;
    let max = u32::try_from(last).unwrap_or(u32::MAX);
    let drawn = rng.next_u32_range(0, max);
    usize::try_from(drawn).map_or(last, |i| i.min(last))
}
