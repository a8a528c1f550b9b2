//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Route user-facing notices through the toast queue instead of
//!   per-screen banners.

use crate::core::session::SessionSlice;
use crate::features::gallery::state::GalleryState;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Most toasts kept on screen at once; older ones are dropped first.
const MAX_TOASTS: usize = 4;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Authentication + boot flow state.
    pub session: SessionSlice,
    /// Gallery listing and selection state.
    pub gallery: GalleryState,
    /// Pending toast notifications.
    pub toasts: ToastQueue,
}

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast payload rendered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Bounded queue of pending toasts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ToastQueue {
    /// Toasts in display order, oldest first.
    pub entries: Vec<Toast>,
    /// Last id handed out.
    pub next_id: u64,
}

/// Dispatch handle bound to the global store.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

/// Queue a toast, dropping the oldest entries past the display cap.
pub fn push_toast(store: &mut AppStore, kind: ToastKind, message: impl Into<String>) {
    let queue = &mut store.toasts;
    queue.next_id += 1;
    queue.entries.push(Toast {
        id: queue.next_id,
        message: message.into(),
        kind,
    });
    if queue.entries.len() > MAX_TOASTS {
        let drain = queue.entries.len() - MAX_TOASTS;
        queue.entries.drain(0..drain);
    }
}

/// Remove a toast by id; unknown ids are ignored.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.toasts.entries.retain(|toast| toast.id != id);
}

#[cfg(test)]
mod tests {
    use super::{AppStore, MAX_TOASTS, ToastKind, dismiss_toast, push_toast};

    #[test]
    fn toast_queue_drops_oldest_past_cap() {
        let mut store = AppStore::default();
        for n in 0..6 {
            push_toast(&mut store, ToastKind::Info, format!("notice {n}"));
        }
        assert_eq!(store.toasts.entries.len(), MAX_TOASTS);
        assert_eq!(store.toasts.entries[0].message, "notice 2");
        assert_eq!(store.toasts.next_id, 6);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut store = AppStore::default();
        push_toast(&mut store, ToastKind::Success, "kept");
        push_toast(&mut store, ToastKind::Error, "dropped");
        let target = store.toasts.entries[1].id;
        dismiss_toast(&mut store, target);
        assert_eq!(store.toasts.entries.len(), 1);
        assert_eq!(store.toasts.entries[0].message, "kept");
        dismiss_toast(&mut store, 999);
        assert_eq!(store.toasts.entries.len(), 1);
    }
}
