//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod selection_bar;

pub(crate) use empty_state::EmptyState;
pub(crate) use selection_bar::SelectionBar;
