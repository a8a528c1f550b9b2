//! Browser-side service clients.

pub mod api;
pub mod clipboard;
