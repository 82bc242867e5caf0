//! Commands for the sequencing context.

/// Command to generate a new sequence for a style.
#[derive(Debug, Clone)]
pub struct GenerateSequence {
    /// Style whose corpus is walked.
    pub style: String,
    /// Desired number of clips.
    pub target_length: usize,
    /// Name given to the generated sequence.
    pub name: String,
    /// Description given to the generated sequence.
    pub description: String,
}
