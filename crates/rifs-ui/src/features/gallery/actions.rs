//! Gallery actions emitted from UI controls.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

/// High-level gallery actions from the toolbar and grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryAction {
    /// Fetch the next page if one may exist.
    LoadMore,
    /// Reload the listing from the first page.
    Refresh,
    /// Enter or leave bulk-select mode.
    ToggleSelectMode,
    /// Select every materialized image.
    SelectAll,
    /// Drop the current selection.
    ClearSelection,
    /// Delete every selected image.
    DeleteSelected,
    /// Delete a single image by hash.
    Delete(String),
}
