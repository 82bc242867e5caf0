//! Test gateways — mock `SequencePersistenceGateway` implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use figurelab_core::error::DomainError;
use figurelab_core::repository::{SequencePersistenceGateway, SequenceRecord, StoredSequence};

/// A gateway that keeps saved records in memory and records every call.
/// Identifiers are assigned as `seq-1`, `seq-2`, ... in save order.
#[derive(Debug, Default)]
pub struct RecordingSequenceGateway {
    records: Mutex<Vec<StoredSequence>>,
    deleted: Mutex<Vec<String>>,
    next_id: Mutex<u64>,
}

impl RecordingSequenceGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway pre-loaded with stored records.
    #[must_use]
    pub fn with_records(records: Vec<StoredSequence>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Returns a snapshot of every record currently held.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_records(&self) -> Vec<StoredSequence> {
        self.records.lock().unwrap().clone()
    }

    /// Returns the identifiers passed to `delete`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SequencePersistenceGateway for RecordingSequenceGateway {
    async fn save(&self, record: &SequenceRecord) -> Result<String, DomainError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("seq-{next}")
        };
        self.records.lock().unwrap().push(StoredSequence {
            id: id.clone(),
            record: record.clone(),
        });
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.deleted.lock().unwrap().push(id.to_owned());
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(DomainError::NotFound(format!("sequence {id}")));
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<StoredSequence>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_by_style(&self, style: &str) -> Result<Vec<StoredSequence>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.record.style == style)
            .cloned()
            .collect())
    }
}

/// A gateway that always returns an infrastructure error. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingSequenceGateway;

#[async_trait]
impl SequencePersistenceGateway for FailingSequenceGateway {
    async fn save(&self, _record: &SequenceRecord) -> Result<String, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete(&self, _id: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn get(&self, _id: &str) -> Result<Option<StoredSequence>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list_by_style(&self, _style: &str) -> Result<Vec<StoredSequence>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
