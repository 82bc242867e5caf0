//! Domain error types.

use thiserror::Error;

use crate::clip::ClipId;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A sequence index was outside `[0, len)`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The sequence length at the time of the call.
        len: usize,
    },

    /// The append policy forbids repeating a clip.
    #[error("clip {0} is already in the sequence")]
    DuplicateClip(ClipId),

    /// The append policy forbids an incompatible transition.
    #[error("clip {to} cannot follow clip {from}")]
    IncompatibleTransition {
        /// The clip currently at the end of the sequence.
        from: ClipId,
        /// The clip that was refused.
        to: ClipId,
    },

    /// A sequence is not ready to be saved.
    #[error("missing metadata: {0}")]
    MissingMetadata(String),

    /// A persisted sequence references a clip that no longer exists.
    #[error("unresolved clip reference: {0}")]
    UnresolvedClipReference(ClipId),

    /// A persisted record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
