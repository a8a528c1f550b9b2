//! Persistence and environment helpers for the app shell.

use crate::core::session::Credentials;
use crate::features::settings::logic::resolve_base_url;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

pub(crate) const BASE_URL_KEY: &str = "rifs.api_base_url";
pub(crate) const AUTH_TOKEN_KEY: &str = "rifs.auth_token";
pub(crate) const AUTH_HEADER_KEY: &str = "rifs.auth_header_name";

/// Load persisted credentials; an empty stored token counts as absent.
pub(crate) fn load_credentials() -> Option<Credentials> {
    let token = LocalStorage::get::<String>(AUTH_TOKEN_KEY).ok()?;
    if token.trim().is_empty() {
        return None;
    }
    let header_name = LocalStorage::get::<String>(AUTH_HEADER_KEY).ok();
    Some(Credentials::new(token, header_name))
}

pub(crate) fn persist_credentials(credentials: &Credentials) {
    set_storage(AUTH_TOKEN_KEY, &credentials.token);
    set_storage(AUTH_HEADER_KEY, &credentials.header_name);
}

/// Drop stored credentials; logout must leave nothing behind.
pub(crate) fn clear_credential_storage() {
    delete_storage(AUTH_TOKEN_KEY);
    delete_storage(AUTH_HEADER_KEY);
}

pub(crate) fn load_stored_base_url() -> Option<String> {
    LocalStorage::get::<String>(BASE_URL_KEY).ok()
}

pub(crate) fn persist_base_url(url: &str) {
    set_storage(BASE_URL_KEY, url);
}

pub(crate) fn clear_base_url() {
    delete_storage(BASE_URL_KEY);
}

/// API base URL for this boot: stored setting, then compile-time override,
/// then the development default.
pub(crate) fn api_base_url() -> String {
    resolve_base_url(
        load_stored_base_url().as_deref(),
        option_env!("RIFS_API_BASE_URL"),
    )
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
