//! HTTP client for the image service API (REST).
//!
//! # Design
//! - Create exactly one client per app boot; auth updates go through
//!   interior mutability to avoid rebuilding clients.
//! - Every request carries a client-side time limit so calls never hang.
//! - Envelope decoding happens here; screens only see typed results.

use crate::core::session::Credentials;
use gloo::timers::callback::Timeout;
use gloo_net::http::{Request, Response};
use rifs_api_models::{
    ApiEnvelope, AuthConfig, CacheCleanRequest, CacheCleanupResult, CacheStats, CreateTokenRequest,
    CreatedToken, GalleryPage, TokenPage, UploadedImage, UserInfo, VerifyTokenRequest,
    VerifyTokenResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;
use web_sys::{AbortController, FormData};

/// Time limit for reaching the server, per request.
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Failures surfaced by API calls.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// Transport failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The request exceeded the client-side time limit.
    #[error("request timed out")]
    Timeout,
    /// The server answered with a non-success HTTP status.
    #[error("server responded {status} {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Status text from the response line.
        message: String,
    },
    /// A request or response payload failed to (de)serialize.
    #[error("invalid payload: {0}")]
    Decode(String),
    /// The server rejected the request inside a success-shaped envelope.
    #[error("{0}")]
    Rejected(String),
}

/// Shared HTTP client holding the base URL and active credentials.
#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    credentials: RefCell<Option<Credentials>>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: RefCell::new(None),
        }
    }

    /// Swap the credentials attached to subsequent requests.
    pub(crate) fn set_credentials(&self, credentials: Option<Credentials>) {
        *self.credentials.borrow_mut() = credentials;
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn apply_auth(&self, req: Request) -> Request {
        match self.credentials.borrow().as_ref() {
            Some(credentials) if credentials.has_token() => {
                req.header(&credentials.header_name, &credentials.header_value())
            }
            _ => req,
        }
    }

    /// Send a built request under the shared timeout.
    ///
    /// The timer aborts the fetch and marks the failure so transport
    /// errors and timeouts stay distinguishable.
    async fn send(req: Request) -> Result<Response, ApiError> {
        let controller = AbortController::new().ok();
        let req = match &controller {
            Some(controller) => req.abort_signal(Some(&controller.signal())),
            None => req,
        };
        let timed_out = Rc::new(Cell::new(false));
        let _timeout = controller.map(|controller| {
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(REQUEST_TIMEOUT_MS, move || {
                timed_out.set(true);
                controller.abort();
            })
        });
        let response = req.send().await.map_err(|err| {
            if timed_out.get() {
                ApiError::Timeout
            } else {
                ApiError::Network(err.to_string())
            }
        })?;
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: response.status_text(),
            });
        }
        Ok(response)
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let envelope: ApiEnvelope<T> = Self::decode_json(response).await?;
        envelope.into_data().map_err(ApiError::Rejected)
    }

    async fn decode_ack(response: Response) -> Result<(), ApiError> {
        let envelope: ApiEnvelope<()> = Self::decode_json(response).await?;
        envelope.into_ack().map_err(ApiError::Rejected)
    }

    async fn get_enveloped<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::send(self.apply_auth(Request::get(&self.url(path)))).await?;
        Self::decode_envelope(response).await
    }

    async fn post_enveloped<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self
            .apply_auth(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = Self::send(req).await?;
        Self::decode_envelope(response).await
    }

    async fn post_enveloped_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::send(self.apply_auth(Request::post(&self.url(path)))).await?;
        Self::decode_envelope(response).await
    }

    /// Whether the deployment requires authentication; unauthenticated.
    pub(crate) async fn fetch_auth_config(&self) -> Result<AuthConfig, ApiError> {
        let response = Self::send(Request::get(&self.url("/api/auth/config"))).await?;
        Self::decode_json(response).await
    }

    /// Validate a candidate token; unauthenticated, bare response.
    pub(crate) async fn verify_token(&self, token: &str) -> Result<VerifyTokenResponse, ApiError> {
        let req = Request::post(&self.url("/api/auth/verify"))
            .json(&VerifyTokenRequest {
                token: token.to_string(),
            })
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = Self::send(req).await?;
        Self::decode_json(response).await
    }

    /// Identity and role behind the active credentials.
    pub(crate) async fn fetch_user_info(&self) -> Result<UserInfo, ApiError> {
        self.get_enveloped("/api/auth/user").await
    }

    /// One gallery page at the given cursor.
    pub(crate) async fn fetch_images(&self, offset: u64, limit: u64) -> Result<GalleryPage, ApiError> {
        self.get_enveloped(&format!("/api/images?offset={offset}&limit={limit}"))
            .await
    }

    /// Delete one stored image by hash.
    pub(crate) async fn delete_image(&self, hash: &str) -> Result<(), ApiError> {
        let response =
            Self::send(self.apply_auth(Request::delete(&self.url(&format!("/api/images/{hash}")))))
                .await?;
        Self::decode_ack(response).await
    }

    /// Upload one file as multipart form data.
    pub(crate) async fn upload_image(&self, file: &web_sys::File) -> Result<UploadedImage, ApiError> {
        let form = FormData::new()
            .map_err(|err| ApiError::Network(format!("upload form: {err:?}")))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|err| ApiError::Network(format!("attach file: {err:?}")))?;
        let req = self
            .apply_auth(Request::post(&self.url("/upload")))
            .body(form);
        let response = Self::send(req).await?;
        Self::decode_envelope(response).await
    }

    /// Transform-cache statistics, admin only.
    pub(crate) async fn fetch_cache_stats(&self) -> Result<CacheStats, ApiError> {
        self.get_enveloped("/api/cache/stats").await
    }

    /// Conditional cache clean bounded by age and/or size.
    pub(crate) async fn clean_cache(
        &self,
        request: &CacheCleanRequest,
    ) -> Result<CacheCleanupResult, ApiError> {
        self.post_enveloped("/api/cache/clean", request).await
    }

    /// Threshold-driven automatic cleanup pass.
    pub(crate) async fn auto_cleanup_cache(&self) -> Result<CacheCleanupResult, ApiError> {
        self.post_enveloped_empty("/api/cache/cleanup/auto").await
    }

    /// Decay cached-entry heat scores; returns the touched entry count.
    pub(crate) async fn decay_cache(&self) -> Result<u64, ApiError> {
        self.post_enveloped_empty("/api/cache/decay").await
    }

    /// Drop every cache entry.
    pub(crate) async fn clear_cache(&self) -> Result<CacheCleanupResult, ApiError> {
        let response =
            Self::send(self.apply_auth(Request::delete(&self.url("/api/cache/clear")))).await?;
        Self::decode_envelope(response).await
    }

    /// Access tokens on record, admin only.
    pub(crate) async fn list_tokens(&self) -> Result<TokenPage, ApiError> {
        self.get_enveloped("/api/tokens/list").await
    }

    /// Mint a new access token; the plaintext appears only in this response.
    pub(crate) async fn create_token(
        &self,
        request: &CreateTokenRequest,
    ) -> Result<CreatedToken, ApiError> {
        let req = self
            .apply_auth(Request::post(&self.url("/api/tokens/create")))
            .json(request)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = Self::send(req).await?;
        Self::decode_json(response).await
    }

    /// Revoke and remove an access token.
    pub(crate) async fn delete_token(&self, id: i64) -> Result<(), ApiError> {
        let response =
            Self::send(self.apply_auth(Request::delete(&self.url(&format!("/api/tokens/{id}")))))
                .await?;
        Self::decode_ack(response).await
    }
}
