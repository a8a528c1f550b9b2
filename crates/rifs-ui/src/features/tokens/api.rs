//! API helpers for token administration.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for auth and error handling.

use crate::services::api::{ApiClient, ApiError};
use rifs_api_models::{CreateTokenRequest, CreatedToken, TokenPage};

/// Fetch the full token listing.
pub(crate) async fn fetch_tokens(client: &ApiClient) -> Result<TokenPage, ApiError> {
    client.list_tokens().await
}

/// Mint a new token; the plaintext in the response is shown exactly once.
pub(crate) async fn create_token(
    client: &ApiClient,
    request: &CreateTokenRequest,
) -> Result<CreatedToken, ApiError> {
    client.create_token(request).await
}

/// Revoke a token by id.
pub(crate) async fn delete_token(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete_token(id).await
}
