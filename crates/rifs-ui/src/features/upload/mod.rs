//! Upload feature: multi-file submission with per-file outcomes.
//!
//! # Design
//! - Files in one run upload sequentially; one slow file never hides the
//!   results of the others.
//! - Run bookkeeping is a pure struct so progress math tests natively.
//! - Share links come in URL, Markdown, and HTML flavors.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
