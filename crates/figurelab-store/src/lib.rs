//! File-backed implementations of the Figurelab ports.
//!
//! These stand in for the hosted document store the engine is normally
//! paired with: one JSON file for the corpus, one JSON document per saved
//! sequence, and one JSON map for preferences.

pub mod json_corpus_provider;
pub mod json_preference_store;
pub mod json_sequence_gateway;

use figurelab_core::error::DomainError;

fn io_error(context: &str, e: &std::io::Error) -> DomainError {
    DomainError::Infrastructure(format!("{context}: {e}"))
}

fn json_error(context: &str, e: &serde_json::Error) -> DomainError {
    DomainError::Infrastructure(format!("{context}: {e}"))
}
