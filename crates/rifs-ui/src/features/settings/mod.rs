//! Client settings: where the API server lives.
//!
//! # Design
//! - Validate and normalize the server URL before it is persisted.
//! - A stored URL wins over the compile-time override on the next boot.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
