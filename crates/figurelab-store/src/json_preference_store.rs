//! Preference store keeping a string map in a single JSON file.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use figurelab_core::error::DomainError;
use figurelab_core::preferences::PreferenceStore;
use tokio::sync::Mutex;
use tracing::warn;

use crate::{io_error, json_error};

/// A `PreferenceStore` persisted as one JSON object.
///
/// Writes are serialized through an async mutex so concurrent `set` calls
/// do not lose each other's keys. Each write lands in a sibling temp file
/// that is renamed over the store, so readers never see a partial file.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonPreferenceStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads every stored value. An undecodable file reads as empty so the
    /// next write replaces it.
    async fn read_all(&self) -> Result<BTreeMap<String, String>, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(io_error("reading preferences", &e)),
        };

        match serde_json::from_str(&raw) {
            Ok(values) => Ok(values),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding undecodable preferences file"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PreferenceStore for JsonPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut values = self.read_all().await?;
        values.insert(key.to_owned(), value);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("creating preference directory", &e))?;
        }
        let body = serde_json::to_vec_pretty(&values)
            .map_err(|e| json_error("encoding preferences", &e))?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, body)
            .await
            .map_err(|e| io_error("writing preferences", &e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| io_error("replacing preferences", &e))
    }
}
