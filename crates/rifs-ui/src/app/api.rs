//! Shared handle to the API client.

use crate::services::api::ApiClient;
use std::rc::Rc;

/// Context value exposing one [`ApiClient`] to the whole component tree.
///
/// The client carries its own credential cell, so a token change never
/// requires swapping the context value.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// The boot-wide client handle.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Build a context around a client pointed at `base_url`.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
