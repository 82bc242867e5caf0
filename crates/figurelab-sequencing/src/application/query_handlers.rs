//! Query handlers for the sequencing context.
//!
//! This module contains query handlers that read saved sequences through
//! the persistence gateway and return read-only views.

use chrono::{DateTime, Utc};
use figurelab_core::error::DomainError;
use figurelab_core::repository::{SequencePersistenceGateway, VideoCorpusProvider};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::application::serialization::{LoadedSequence, corpus_lookup, from_persistable};

/// Read-only summary of a saved sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceSummaryView {
    /// Gateway-assigned identifier.
    pub id: String,
    /// Sequence name.
    pub name: String,
    /// Sequence description.
    pub description: String,
    /// Grouping style.
    pub style: String,
    /// Number of stored clip references.
    pub clip_count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Lists saved sequences of a style, newest first.
///
/// # Errors
///
/// Returns the gateway's error if listing fails.
#[instrument(skip(gateway))]
pub async fn list_sequences_by_style(
    style: &str,
    gateway: &dyn SequencePersistenceGateway,
) -> Result<Vec<SequenceSummaryView>, DomainError> {
    let mut views: Vec<SequenceSummaryView> = gateway
        .list_by_style(style)
        .await?
        .into_iter()
        .map(|stored| SequenceSummaryView {
            id: stored.id,
            clip_count: stored.record.videos.len(),
            name: stored.record.name,
            description: stored.record.description,
            style: stored.record.style,
            created_at: stored.record.created_at,
        })
        .collect();

    views.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(views)
}

/// Loads a saved sequence and resolves its clips against the current corpus.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no record has that id, or the
/// gateway's or provider's error if fetching fails. Clips deleted since the
/// sequence was saved are not errors; see [`LoadedSequence::skipped`].
#[instrument(skip(provider, gateway))]
pub async fn load_sequence(
    id: &str,
    provider: &dyn VideoCorpusProvider,
    gateway: &dyn SequencePersistenceGateway,
) -> Result<LoadedSequence, DomainError> {
    let stored = gateway
        .get(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("sequence {id}")))?;

    let corpus = provider.list_by_style(&stored.record.style).await?;
    let loaded = from_persistable(&stored.record, corpus_lookup(&corpus));

    if !loaded.is_complete() {
        warn!(
            skipped = loaded.skipped.len(),
            "sequence references clips that no longer exist"
        );
    }
    Ok(loaded)
}
