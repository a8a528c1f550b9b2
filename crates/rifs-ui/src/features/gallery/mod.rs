//! Gallery feature wiring: paginated browsing, selection, and deletion.
//!
//! # Design
//! - Keep pagination and selection transitions as pure functions over
//!   [`state::GalleryState`] so they test natively.
//! - Restrict API calls to this feature layer to honor UI boundaries.
//! - Drive incremental loading from scroll proximity through the same
//!   guard as the explicit load-more control.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
