//! API helpers for the gallery listing.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for auth and error handling.

use crate::features::gallery::state::PageRequest;
use crate::services::api::{ApiClient, ApiError};
use rifs_api_models::GalleryPage;

/// Fetch one listing page at the given cursor.
pub(crate) async fn fetch_page(
    client: &ApiClient,
    request: PageRequest,
) -> Result<GalleryPage, ApiError> {
    client.fetch_images(request.offset, request.limit).await
}

/// Delete a single image by content hash.
pub(crate) async fn delete_image(client: &ApiClient, hash: &str) -> Result<(), ApiError> {
    client.delete_image(hash).await
}
