//! API helpers for cache maintenance.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for auth and error handling.

use crate::services::api::{ApiClient, ApiError};
use rifs_api_models::{CacheCleanRequest, CacheCleanupResult, CacheStats};

/// Fetch current cache usage and the most recent entries.
pub(crate) async fn fetch_stats(client: &ApiClient) -> Result<CacheStats, ApiError> {
    client.fetch_cache_stats().await
}

/// Remove entries beyond the given age or size bounds.
pub(crate) async fn clean(
    client: &ApiClient,
    request: &CacheCleanRequest,
) -> Result<CacheCleanupResult, ApiError> {
    client.clean_cache(request).await
}

/// Run the server's own retention policy once.
pub(crate) async fn auto_cleanup(client: &ApiClient) -> Result<CacheCleanupResult, ApiError> {
    client.auto_cleanup_cache().await
}

/// Decay access-frequency counters; returns how many entries decayed.
pub(crate) async fn decay(client: &ApiClient) -> Result<u64, ApiError> {
    client.decay_cache().await
}

/// Drop every cached transform.
pub(crate) async fn clear(client: &ApiClient) -> Result<CacheCleanupResult, ApiError> {
    client.clear_cache().await
}
