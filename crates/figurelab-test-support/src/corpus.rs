//! Test corpus providers — mock `VideoCorpusProvider` implementations.

use async_trait::async_trait;
use figurelab_core::clip::Clip;
use figurelab_core::error::DomainError;
use figurelab_core::repository::VideoCorpusProvider;

/// A corpus provider serving a fixed list of clips, filtered by style.
#[derive(Debug, Default)]
pub struct InMemoryCorpusProvider {
    clips: Vec<Clip>,
}

impl InMemoryCorpusProvider {
    /// Creates a provider over `clips`.
    #[must_use]
    pub fn new(clips: Vec<Clip>) -> Self {
        Self { clips }
    }
}

#[async_trait]
impl VideoCorpusProvider for InMemoryCorpusProvider {
    async fn list_by_style(&self, style: &str) -> Result<Vec<Clip>, DomainError> {
        Ok(self
            .clips
            .iter()
            .filter(|c| c.style == style)
            .cloned()
            .collect())
    }
}

/// A corpus provider that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingCorpusProvider;

#[async_trait]
impl VideoCorpusProvider for FailingCorpusProvider {
    async fn list_by_style(&self, _style: &str) -> Result<Vec<Clip>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
