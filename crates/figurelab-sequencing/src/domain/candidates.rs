//! Selection of clips eligible to be appended next.

use figurelab_core::clip::Clip;
use figurelab_core::config::EngineConfig;

use super::compatibility::is_compatible;
use super::sequence::Sequence;

/// Options for [`get_candidates`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateOptions {
    /// Skip compatibility filtering and offer the whole corpus.
    pub include_all: bool,
    /// Leave out clips already present in the sequence.
    pub exclude_used: bool,
}

impl CandidateOptions {
    /// Derives default options from engine configuration: when duplicates
    /// are disallowed, used clips are excluded.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            include_all: false,
            exclude_used: !config.allow_duplicates,
        }
    }
}

/// Returns the clips of `corpus` that may be appended to `sequence`.
///
/// An empty sequence accepts any clip. With `include_all` set the corpus is
/// returned unfiltered. Otherwise a clip qualifies when the last item of the
/// sequence is compatible with it and, under `exclude_used`, its id is not
/// already in the sequence. Corpus order is preserved.
#[must_use]
pub fn get_candidates<'a>(
    corpus: &'a [Clip],
    sequence: &Sequence,
    opts: CandidateOptions,
) -> Vec<&'a Clip> {
    let Some(last) = sequence.last() else {
        return corpus.iter().collect();
    };
    if opts.include_all {
        return corpus.iter().collect();
    }

    corpus
        .iter()
        .filter(|c| is_compatible(last, c))
        .filter(|c| !opts.exclude_used || !sequence.contains(&c.id))
        .collect()
}
