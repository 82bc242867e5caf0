//! Corpus provider reading a JSON array of clips from disk.

use std::path::PathBuf;

use async_trait::async_trait;
use figurelab_core::clip::Clip;
use figurelab_core::error::DomainError;
use figurelab_core::repository::VideoCorpusProvider;
use tracing::debug;

use crate::{io_error, json_error};

/// Reads the whole corpus file on each call and filters it by style.
#[derive(Debug, Clone)]
pub struct JsonCorpusProvider {
    path: PathBuf,
}

impl JsonCorpusProvider {
    /// Creates a provider over the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl VideoCorpusProvider for JsonCorpusProvider {
    async fn list_by_style(&self, style: &str) -> Result<Vec<Clip>, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| io_error("reading corpus", &e))?;
        let clips: Vec<Clip> =
            serde_json::from_str(&raw).map_err(|e| json_error("decoding corpus", &e))?;

        let total = clips.len();
        let matching: Vec<Clip> = clips.into_iter().filter(|c| c.style == style).collect();
        debug!(
            path = %self.path.display(),
            style,
            total,
            matching = matching.len(),
            "corpus loaded"
        );
        Ok(matching)
    }
}
