//! Sequence gateway storing one JSON document per saved sequence.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use figurelab_core::error::DomainError;
use figurelab_core::repository::{SequencePersistenceGateway, SequenceRecord, StoredSequence};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{io_error, json_error};

/// Keeps each record in `<dir>/<id>.json`, where `id` is a fresh UUID.
#[derive(Debug, Clone)]
pub struct JsonSequenceGateway {
    dir: PathBuf,
}

impl JsonSequenceGateway {
    /// Creates a gateway rooted at `dir`. The directory is created on the
    /// first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, DomainError> {
        let parsed = canonical_id(id)?;
        Ok(self.dir.join(format!("{parsed}.json")))
    }

    async fn read_record(path: &Path) -> Result<SequenceRecord, DomainError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| io_error("reading sequence", &e))?;
        serde_json::from_str(&raw).map_err(|e| json_error("decoding sequence", &e))
    }
}

/// Ids are always UUIDs; anything else could escape the directory.
fn canonical_id(id: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(id).map_err(|_| DomainError::NotFound(format!("sequence {id}")))
}

#[async_trait]
impl SequencePersistenceGateway for JsonSequenceGateway {
    async fn save(&self, record: &SequenceRecord) -> Result<String, DomainError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error("creating sequence directory", &e))?;

        let id = Uuid::now_v7().to_string();
        let body = serde_json::to_vec_pretty(record)
            .map_err(|e| json_error("encoding sequence", &e))?;
        tokio::fs::write(self.path_for(&id)?, body)
            .await
            .map_err(|e| io_error("writing sequence", &e))?;

        debug!(sequence_id = %id, "sequence written");
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        match tokio::fs::remove_file(self.path_for(id)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DomainError::NotFound(format!("sequence {id}")))
            }
            Err(e) => Err(io_error("deleting sequence", &e)),
        }
    }

    async fn get(&self, id: &str) -> Result<Option<StoredSequence>, DomainError> {
        let Ok(canonical) = canonical_id(id) else {
            return Ok(None);
        };
        let path = self.dir.join(format!("{canonical}.json"));
        if !tokio::fs::try_exists(&path)
            .await
            .map_err(|e| io_error("checking sequence", &e))?
        {
            return Ok(None);
        }
        let record = Self::read_record(&path).await?;
        Ok(Some(StoredSequence {
            id: canonical.to_string(),
            record,
        }))
    }

    async fn list_by_style(&self, style: &str) -> Result<Vec<StoredSequence>, DomainError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("listing sequences", &e)),
        };

        let mut found = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error("listing sequences", &e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| Uuid::parse_str(stem).ok())
            else {
                debug!(path = %path.display(), "ignoring file without a sequence id");
                continue;
            };
            match Self::read_record(&path).await {
                Ok(record) if record.style == style => found.push(StoredSequence {
                    id: id.to_string(),
                    record,
                }),
                Ok(_) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable sequence"),
            }
        }

        found.sort_by(|a, b| a.record.created_at.cmp(&b.record.created_at));
        Ok(found)
    }
}
