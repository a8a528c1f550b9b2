//! API helpers for uploads.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for auth and error handling.

use crate::services::api::{ApiClient, ApiError};
use rifs_api_models::UploadedImage;

/// Upload one file; the server answers with its content hash.
pub(crate) async fn upload_file(
    client: &ApiClient,
    file: &web_sys::File,
) -> Result<UploadedImage, ApiError> {
    client.upload_image(file).await
}
