//! Clipboard access through the browser API.

use gloo::utils::window;
use wasm_bindgen_futures::JsFuture;

/// Writes `text` to the system clipboard.
///
/// Returns `false` when the browser refuses, for example outside a
/// secure context or without a user gesture.
pub async fn copy_text(text: &str) -> bool {
    let promise = window().navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.is_ok()
}
