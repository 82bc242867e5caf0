//! Persistence of per-page browsing filters through a `PreferenceStore`.

use figurelab_core::error::DomainError;
use figurelab_core::preferences::PreferenceStore;
use tracing::{instrument, warn};

use crate::domain::filters::ClipFilter;

/// Store key for a page's filter.
#[must_use]
pub fn filter_key(page: &str) -> String {
    format!("filters:{page}")
}

/// Loads the filter remembered for `page`.
///
/// A missing entry yields the default filter. So does an entry that no
/// longer parses, which is logged and otherwise ignored.
///
/// # Errors
///
/// Returns the store's error if reading fails.
#[instrument(skip(store))]
pub async fn load_filter(
    page: &str,
    store: &dyn PreferenceStore,
) -> Result<ClipFilter, DomainError> {
    let Some(raw) = store.get(&filter_key(page)).await? else {
        return Ok(ClipFilter::default());
    };

    match serde_json::from_str(&raw) {
        Ok(filter) => Ok(filter),
        Err(e) => {
            warn!(error = %e, "discarding unreadable filter preference");
            Ok(ClipFilter::default())
        }
    }
}

/// Remembers `filter` for `page`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the filter cannot be encoded, or
/// the store's error if writing fails.
#[instrument(skip(filter, store))]
pub async fn save_filter(
    page: &str,
    filter: &ClipFilter,
    store: &dyn PreferenceStore,
) -> Result<(), DomainError> {
    let raw = serde_json::to_string(filter)
        .map_err(|e| DomainError::Infrastructure(format!("filter serialization failed: {e}")))?;
    store.set(&filter_key(page), raw).await
}
