//! Feature slices: each screen keeps its state, logic, API calls, and view
//! together.

pub mod cache;
pub mod gallery;
pub mod settings;
pub mod tokens;
pub mod upload;
