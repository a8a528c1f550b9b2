#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the RIFS image service API.
//!
//! These types describe the one canonical wire contract the web client
//! speaks: an envelope of `{success, message, data}` around JSON payloads,
//! images keyed by content hash, offset/limit gallery paging, and numeric
//! ids for admin token rows. Keeping them in a dedicated crate lets the
//! pagination/selection logic decode and test against the real shapes
//! without pulling in any browser machinery.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic response envelope wrapped around JSON payloads.
///
/// Mutating endpoints may omit `message` and `data`, so both fields
/// tolerate absence when decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiEnvelope<T> {
    /// Whether the server accepted the request.
    pub success: bool,
    /// Human-readable status or error description.
    #[serde(default)]
    pub message: String,
    /// Payload carried on success; absent on most failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, treating a rejected or payload-less envelope as
    /// an error carrying the server message.
    ///
    /// # Errors
    /// Returns the server `message` when `success` is false or `data` is
    /// missing.
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err(rejection_message(self.message));
        }
        self.data
            .ok_or_else(|| "response body is missing its payload".to_string())
    }

    /// Unwrap an acknowledgement-style envelope that carries no payload.
    ///
    /// # Errors
    /// Returns the server `message` when `success` is false.
    pub fn into_ack(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(rejection_message(self.message))
        }
    }
}

fn rejection_message(message: String) -> String {
    if message.trim().is_empty() {
        "request rejected by the server".to_string()
    } else {
        message
    }
}

/// Access role attached to a token or session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including cache and token administration.
    Admin,
    /// Upload/browse access only.
    #[default]
    User,
}

impl Role {
    /// Wire/display spelling of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Parse a select-control value, defaulting unknown input to [`Role::User`].
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// Response of `GET /api/auth/config`; served bare, without the envelope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthConfig {
    /// Whether requests must carry an auth token.
    pub enabled: bool,
}

/// Request body for `POST /api/auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyTokenRequest {
    /// Candidate token value to validate.
    pub token: String,
}

/// Response of `POST /api/auth/verify`; served bare so failed attempts can
/// still carry a message without an HTTP error status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyTokenResponse {
    /// Whether the token was accepted.
    pub success: bool,
    /// Validation outcome description.
    #[serde(default)]
    pub message: String,
    /// Header name the deployment expects the token under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
    /// Role granted to the verified token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Identity payload of `GET /api/auth/user`, carried in the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    /// Display name of the token owner.
    pub name: String,
    /// Role granted to the caller.
    pub role: Role,
}

/// One stored image as listed by `GET /api/images`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageMeta {
    /// Content hash; the canonical image identifier.
    pub hash: String,
    /// File extension recorded at upload time.
    pub extension: String,
    /// MIME type recorded at upload time.
    pub mime_type: String,
    /// Stored size in bytes.
    pub size: u64,
    /// Client-side filename at upload time, when one was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    /// Upload timestamp.
    pub created_at: DateTime<Utc>,
}

impl ImageMeta {
    /// Best display name for the image: the original filename when known,
    /// otherwise a hash-derived fallback.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.original_filename {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("{}.{}", self.hash, self.extension),
        }
    }
}

/// One page of the gallery listing, carried in the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GalleryPage {
    /// Images in server order for this window.
    pub items: Vec<ImageMeta>,
    /// Total number of images stored server-side.
    pub total_count: u64,
}

/// Payload of a successful `POST /upload`, carried in the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UploadedImage {
    /// Content hash assigned to the stored image.
    pub hash: String,
    /// Extension the server stored the image under.
    pub extension: String,
    /// Stored size in bytes.
    pub size: u64,
}

/// Cache statistics payload of `GET /api/cache/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheStats {
    /// Total bytes held by the transform cache.
    pub total_size: u64,
    /// Number of cached entries.
    pub total_count: u64,
    /// Most recently touched entries, newest first.
    #[serde(default)]
    pub items: Vec<CacheEntry>,
}

/// One cached derived image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheEntry {
    /// Content hash of the source image.
    pub hash: String,
    /// Encoded output format of the cached variant.
    pub format: String,
    /// Size of the cached file in bytes.
    pub file_size: u64,
    /// Last read timestamp used by the heat model.
    pub last_accessed: DateTime<Utc>,
}

/// Request body for `POST /api/cache/clean`; at least one bound is
/// expected, the server treats absent fields as unconstrained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CacheCleanRequest {
    /// Drop entries older than this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    /// Shrink the cache below this many bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
}

/// Outcome of a cache maintenance operation, carried in the envelope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CacheCleanupResult {
    /// Number of cache files removed.
    pub deleted_count: u64,
    /// Bytes reclaimed by the removal.
    pub freed_size: u64,
}

/// One admin-visible access token row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRecord {
    /// Numeric token id used by the delete endpoint.
    pub id: i64,
    /// Operator-assigned token name.
    pub name: String,
    /// Role granted to the token.
    pub role: Role,
    /// Whether the token is currently usable.
    pub is_active: bool,
    /// Issue timestamp.
    pub created_at: DateTime<Utc>,
    /// Last successful authentication, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
    /// Expiry timestamp, when the token is time-bounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Upload quota in bytes; absent means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_upload_size: Option<u64>,
    /// Bytes already uploaded against the quota.
    #[serde(default)]
    pub used_upload_size: u64,
}

/// Token listing payload of `GET /api/tokens/list`, carried in the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPage {
    /// Token rows in server order.
    pub items: Vec<TokenRecord>,
    /// Total number of tokens.
    pub total: u64,
}

/// Request body for `POST /api/tokens/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTokenRequest {
    /// Operator-assigned token name.
    pub name: String,
    /// Role to grant.
    pub role: Role,
    /// Upload quota in bytes; absent means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_upload_size: Option<u64>,
    /// Expiry timestamp; absent means the token never expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Payload of a successful token creation, carried in the envelope.
///
/// `plaintext` is the only place the secret ever appears; the listing
/// endpoint returns [`TokenRecord`] rows without it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedToken {
    /// The secret token value, shown exactly once.
    pub plaintext: String,
    /// The stored record for the new token.
    pub token: TokenRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn gallery_page_decodes_server_listing() {
        let body = r#"{
            "success": true,
            "message": "ok",
            "data": {
                "items": [
                    {
                        "hash": "9f2d4c1ab0e857",
                        "extension": "png",
                        "mime_type": "image/png",
                        "size": 48213,
                        "original_filename": "diagram.png",
                        "created_at": "2024-11-02T09:30:00Z"
                    },
                    {
                        "hash": "77aa01b4c9d2ff",
                        "extension": "jpeg",
                        "mime_type": "image/jpeg",
                        "size": 183002,
                        "created_at": "2024-11-01T18:05:12Z"
                    }
                ],
                "total_count": 35
            }
        }"#;
        let envelope: ApiEnvelope<GalleryPage> =
            serde_json::from_str(body).expect("listing should decode");
        let page = envelope.into_data().expect("payload present");
        assert_eq!(page.total_count, 35);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].display_name(), "diagram.png");
        assert_eq!(page.items[1].original_filename, None);
        assert_eq!(page.items[1].display_name(), "77aa01b4c9d2ff.jpeg");
        let expected = Utc.with_ymd_and_hms(2024, 11, 2, 9, 30, 0).unwrap();
        assert_eq!(page.items[0].created_at, expected);
    }

    #[test]
    fn rejected_envelope_surfaces_server_message() {
        let body = r#"{"success": false, "message": "token quota exceeded"}"#;
        let envelope: ApiEnvelope<UploadedImage> =
            serde_json::from_str(body).expect("envelope should decode");
        assert_eq!(
            envelope.into_data().unwrap_err(),
            "token quota exceeded".to_string()
        );
    }

    #[test]
    fn bare_ack_tolerates_missing_message_and_data() {
        let body = r#"{"success": true}"#;
        let envelope: ApiEnvelope<CacheCleanupResult> =
            serde_json::from_str(body).expect("ack should decode");
        assert!(envelope.clone().into_ack().is_ok());
        assert!(envelope.into_data().is_err());
    }

    #[test]
    fn verify_response_skips_absent_optionals() {
        let ok = VerifyTokenResponse {
            success: true,
            message: "verified".to_string(),
            header_name: None,
            role: Some(Role::Admin),
        };
        let encoded = serde_json::to_value(&ok).expect("encode");
        assert!(encoded.get("header_name").is_none());
        assert_eq!(encoded["role"], "admin");

        let failed: VerifyTokenResponse =
            serde_json::from_str(r#"{"success": false, "message": "invalid token"}"#)
                .expect("decode");
        assert!(!failed.success);
        assert_eq!(failed.header_name, None);
        assert_eq!(failed.role, None);
    }

    #[test]
    fn token_record_decodes_with_null_quota() {
        let body = r#"{
            "id": 7,
            "name": "ci-uploader",
            "role": "user",
            "is_active": true,
            "created_at": "2024-10-20T12:00:00Z",
            "last_used_at": null,
            "max_upload_size": null,
            "used_upload_size": 0
        }"#;
        let record: TokenRecord = serde_json::from_str(body).expect("record should decode");
        assert_eq!(record.id, 7);
        assert_eq!(record.role, Role::User);
        assert_eq!(record.last_used_at, None);
        assert_eq!(record.max_upload_size, None);
    }

    #[test]
    fn clean_request_omits_unset_bounds() {
        let request = CacheCleanRequest {
            max_age: Some(86_400),
            max_size: None,
        };
        let encoded = serde_json::to_string(&request).expect("encode");
        assert_eq!(encoded, r#"{"max_age":86400}"#);
    }

    #[test]
    fn role_select_values_round_trip() {
        assert_eq!(Role::from_value("admin"), Role::Admin);
        assert_eq!(Role::from_value("user"), Role::User);
        assert_eq!(Role::from_value("anything-else"), Role::User);
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::default(), Role::User);
    }
}
