//! Cache administration: stats, targeted cleanup, decay, and full clear.
//!
//! # Design
//! - Keep form parsing pure in [`state::CleanFormState`] so validation
//!   tests run natively.
//! - Every maintenance call refreshes the stats panel afterwards, so the
//!   numbers on screen never outlive the operation that changed them.
//! - Destructive calls confirm first; a full clear confirms twice.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
