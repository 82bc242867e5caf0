//! Ports to the external corpus and persistence collaborators.
//!
//! The engine never calls these itself; application handlers fetch data
//! through them before an editing session and hand results back after it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clip::{Clip, ClipId};
use crate::error::DomainError;

/// Persisted document shape of a saved sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceRecord {
    /// Sequence name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Grouping style inherited from the builder.
    pub style: String,
    /// Ordered clip ids; duplicates allowed.
    pub videos: Vec<ClipId>,
    /// Creation timestamp (ISO-8601 on the wire).
    pub created_at: DateTime<Utc>,
}

/// A persisted record together with the identifier the gateway assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSequence {
    /// Gateway-assigned identifier.
    pub id: String,
    /// The persisted document.
    #[serde(flatten)]
    pub record: SequenceRecord,
}

/// Read-only source of clips.
#[async_trait]
pub trait VideoCorpusProvider: Send + Sync {
    /// Returns every clip of the given style.
    async fn list_by_style(&self, style: &str) -> Result<Vec<Clip>, DomainError>;
}

/// CRUD gateway for saved sequences.
#[async_trait]
pub trait SequencePersistenceGateway: Send + Sync {
    /// Persists a record and returns its new identifier.
    async fn save(&self, record: &SequenceRecord) -> Result<String, DomainError>;

    /// Deletes a record.
    ///
    /// Returns `DomainError::NotFound` if no record has that identifier.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Fetches a single record, or `None` if it does not exist.
    async fn get(&self, id: &str) -> Result<Option<StoredSequence>, DomainError>;

    /// Returns every record of the given style.
    async fn list_by_style(&self, style: &str) -> Result<Vec<StoredSequence>, DomainError>;
}
