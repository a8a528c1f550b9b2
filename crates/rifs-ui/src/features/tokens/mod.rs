//! Access-token administration: listing, minting, and revocation.
//!
//! # Design
//! - Keep form parsing pure in [`state::TokenFormState`] so validation
//!   tests run natively.
//! - A freshly minted secret is shown once, masked until revealed.
//! - Revocation confirms with the token name and refreshes the listing.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
