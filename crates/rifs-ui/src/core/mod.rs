//! Core, DOM-free primitives and helpers for the web client.
pub mod logic;
pub mod session;
pub mod store;
