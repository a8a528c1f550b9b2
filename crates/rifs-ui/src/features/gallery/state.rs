//! Gallery models and pure pagination/selection transitions for testing
//! outside wasm.

use rifs_api_models::{GalleryPage, ImageMeta};
use std::collections::BTreeSet;

/// Images requested per page fetch.
pub const PAGE_SIZE: u64 = 32;

/// Selection set used for bulk gallery actions.
pub type SelectionSet = BTreeSet<String>;

/// Gallery slice stored in the app state.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    /// Materialized images in load order; server order is authoritative.
    pub items: Vec<ImageMeta>,
    /// Offset cursor for the next page fetch.
    pub offset: u64,
    /// Server-reported total image count.
    pub total: u64,
    /// In-flight guard; at most one page load at a time.
    pub loading: bool,
    /// Whether another page may exist.
    pub has_more: bool,
    /// Whether bulk-select mode is active.
    pub select_mode: bool,
    /// Hashes marked for bulk actions; always a subset of `items`.
    pub selected: SelectionSet,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            offset: 0,
            total: 0,
            loading: false,
            has_more: true,
            select_mode: false,
            selected: SelectionSet::new(),
        }
    }
}

/// Offset/limit pair for one page fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first image to return.
    pub offset: u64,
    /// Maximum number of images to return.
    pub limit: u64,
}

/// Mark a page load as started when idle and more pages may exist.
///
/// Returns `false` without touching state when a load is already in flight
/// or the listing is exhausted; callers must not fetch in that case.
pub fn begin_load(state: &mut GalleryState) -> bool {
    if state.loading || !state.has_more {
        return false;
    }
    state.loading = true;
    true
}

/// The fetch parameters for the next page under the current cursor.
#[must_use]
pub const fn page_request(state: &GalleryState) -> PageRequest {
    PageRequest {
        offset: state.offset,
        limit: PAGE_SIZE,
    }
}

/// Append a fetched page and advance the cursor.
///
/// A short page (fewer than [`PAGE_SIZE`] images) marks the listing as
/// exhausted; an empty first page therefore lands in the empty display
/// state rather than an error.
pub fn apply_page(state: &mut GalleryState, page: GalleryPage) {
    let returned = u64::try_from(page.items.len()).unwrap_or(u64::MAX);
    state.has_more = returned == PAGE_SIZE;
    state.offset = state.offset.saturating_add(returned);
    state.total = page.total_count;
    state.items.extend(page.items);
    state.loading = false;
}

/// Clear the in-flight guard after a failed load.
///
/// The cursor, listing, and `has_more` flag stay put so the same page can
/// be retried through the normal trigger path.
pub const fn apply_load_failure(state: &mut GalleryState) {
    state.loading = false;
}

/// Reset the cursor, listing, and selection for a full reload.
///
/// Returns `false` while a load is in flight so a stale completion can
/// never append into a freshly cleared listing.
pub fn reset_for_refresh(state: &mut GalleryState) -> bool {
    if state.loading {
        return false;
    }
    state.items.clear();
    state.selected.clear();
    state.offset = 0;
    state.has_more = true;
    true
}

/// Toggle bulk-select mode; leaving it abandons the selection.
pub fn toggle_select_mode(state: &mut GalleryState) {
    if state.select_mode {
        state.selected.clear();
    }
    state.select_mode = !state.select_mode;
}

/// Add or remove one hash; hashes not currently materialized are ignored.
pub fn set_selected(state: &mut GalleryState, hash: &str, selected: bool) {
    if selected {
        if state.items.iter().any(|item| item.hash == hash) {
            state.selected.insert(hash.to_string());
        }
    } else {
        state.selected.remove(hash);
    }
}

/// Select every materialized image.
pub fn select_all_visible(state: &mut GalleryState) {
    state.selected = state.items.iter().map(|item| item.hash.clone()).collect();
}

/// Empty the selection without altering the listing.
pub fn clear_selection(state: &mut GalleryState) {
    state.selected.clear();
}

/// Selected hashes in the order their images appear in the listing.
#[must_use]
pub fn selected_in_item_order(state: &GalleryState) -> Vec<String> {
    state
        .items
        .iter()
        .filter(|item| state.selected.contains(&item.hash))
        .map(|item| item.hash.clone())
        .collect()
}

/// Reconcile one confirmed deletion into the listing.
///
/// The offset cursor is left untouched; it tracks how many images were
/// fetched, not how many remain.
pub fn apply_delete_success(state: &mut GalleryState, hash: &str) {
    let before = state.items.len();
    state.items.retain(|item| item.hash != hash);
    if state.items.len() == before {
        return;
    }
    state.selected.remove(hash);
    state.total = state.total.saturating_sub(1);
}

/// Whether deletions emptied the listing while more pages may exist.
#[must_use]
pub fn needs_backfill(state: &GalleryState) -> bool {
    state.items.is_empty() && state.has_more
}

/// Tally of a batch delete; identifiers succeed or fail independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Identifiers confirmed deleted by the server.
    pub succeeded: usize,
    /// Identifiers that failed and stay listed.
    pub failed: usize,
}

impl DeleteOutcome {
    /// Count one confirmed deletion.
    pub const fn record_success(&mut self) {
        self.succeeded += 1;
    }

    /// Count one failed deletion.
    pub const fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// User-facing summary of the batch result.
    #[must_use]
    pub fn summary(&self) -> String {
        let attempted = self.succeeded + self.failed;
        if self.failed == 0 {
            let plural = if self.succeeded == 1 { "" } else { "s" };
            format!("Deleted {} image{plural}", self.succeeded)
        } else {
            format!(
                "Deleted {} of {attempted} images, {} failed",
                self.succeeded, self.failed
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DeleteOutcome, GalleryState, PAGE_SIZE, apply_delete_success, apply_load_failure,
        apply_page, begin_load, clear_selection, needs_backfill, page_request, reset_for_refresh,
        select_all_visible, selected_in_item_order, set_selected, toggle_select_mode,
    };
    use chrono::{TimeZone, Utc};
    use rifs_api_models::{GalleryPage, ImageMeta};

    fn image(hash: &str) -> ImageMeta {
        ImageMeta {
            hash: hash.to_string(),
            extension: "png".into(),
            mime_type: "image/png".into(),
            size: 2048,
            original_filename: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    fn page(hashes: &[&str], total: u64) -> GalleryPage {
        GalleryPage {
            items: hashes.iter().map(|hash| image(hash)).collect(),
            total_count: total,
        }
    }

    fn full_page(start: u64, total: u64) -> GalleryPage {
        GalleryPage {
            items: (0..PAGE_SIZE)
                .map(|n| image(&format!("img-{}", start + n)))
                .collect(),
            total_count: total,
        }
    }

    #[test]
    fn pages_append_in_server_order() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        assert_eq!(page_request(&state).offset, 0);
        assert_eq!(page_request(&state).limit, PAGE_SIZE);
        apply_page(&mut state, full_page(0, 40));

        assert!(begin_load(&mut state));
        assert_eq!(page_request(&state).offset, 32);
        apply_page(&mut state, page(&["late-a", "late-b"], 40));

        assert_eq!(state.items.len(), 34);
        assert_eq!(state.items[0].hash, "img-0");
        assert_eq!(state.items[32].hash, "late-a");
        assert_eq!(state.items[33].hash, "late-b");
    }

    #[test]
    fn concurrent_load_attempts_are_ignored() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        let snapshot = state.clone();
        assert!(!begin_load(&mut state));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn listing_exhausts_after_short_page() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        apply_page(&mut state, full_page(0, 35));
        assert!(state.has_more);
        assert_eq!(state.offset, 32);

        assert!(begin_load(&mut state));
        apply_page(&mut state, page(&["img-32", "img-33", "img-34"], 35));
        assert!(!state.has_more);
        assert_eq!(state.offset, 35);
        assert_eq!(state.items.len(), 35);

        assert!(!begin_load(&mut state));
    }

    #[test]
    fn empty_first_page_marks_listing_complete() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        apply_page(&mut state, page(&[], 0));
        assert!(!state.has_more);
        assert!(state.items.is_empty());
        assert_eq!(state.offset, 0);
        assert!(!state.loading);
    }

    #[test]
    fn failed_load_keeps_cursor_for_retry() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        apply_page(&mut state, full_page(0, 64));

        assert!(begin_load(&mut state));
        apply_load_failure(&mut state);
        assert!(!state.loading);
        assert_eq!(state.offset, 32);
        assert_eq!(state.items.len(), 32);
        assert!(state.has_more);

        assert!(begin_load(&mut state));
        assert_eq!(page_request(&state).offset, 32);
    }

    #[test]
    fn refresh_resets_cursor_and_selection() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        apply_page(&mut state, page(&["keep-me"], 1));
        set_selected(&mut state, "keep-me", true);
        state.select_mode = true;

        assert!(reset_for_refresh(&mut state));
        assert!(state.items.is_empty());
        assert!(state.selected.is_empty());
        assert_eq!(state.offset, 0);
        assert!(state.has_more);
    }

    #[test]
    fn refresh_waits_for_inflight_load() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        apply_page(&mut state, full_page(0, 64));
        assert!(begin_load(&mut state));

        let snapshot = state.clone();
        assert!(!reset_for_refresh(&mut state));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn selection_ignores_unmaterialized_ids() {
        let mut state = GalleryState::default();
        apply_page(&mut state, page(&["present"], 1));

        set_selected(&mut state, "ghost", true);
        assert!(state.selected.is_empty());

        set_selected(&mut state, "present", true);
        assert!(state.selected.contains("present"));

        set_selected(&mut state, "present", false);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn select_all_then_clear_leaves_listing_intact() {
        let mut state = GalleryState::default();
        let hashes: Vec<String> = (0..10).map(|n| format!("img-{n}")).collect();
        let refs: Vec<&str> = hashes.iter().map(String::as_str).collect();
        apply_page(&mut state, page(&refs, 10));

        select_all_visible(&mut state);
        assert_eq!(state.selected.len(), 10);

        clear_selection(&mut state);
        assert!(state.selected.is_empty());
        assert_eq!(state.items.len(), 10);
    }

    #[test]
    fn leaving_select_mode_abandons_selection() {
        let mut state = GalleryState::default();
        apply_page(&mut state, page(&["a"], 1));
        set_selected(&mut state, "a", true);

        toggle_select_mode(&mut state);
        assert!(state.select_mode);
        assert!(state.selected.contains("a"));

        toggle_select_mode(&mut state);
        assert!(!state.select_mode);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn delete_reconciles_listing_and_selection() {
        let mut state = GalleryState::default();
        apply_page(&mut state, page(&["a", "b", "c"], 3));
        select_all_visible(&mut state);

        apply_delete_success(&mut state, "b");
        assert_eq!(state.items.len(), 2);
        assert!(!state.selected.contains("b"));
        assert_eq!(state.total, 2);

        apply_delete_success(&mut state, "ghost");
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total, 2);
    }

    #[test]
    fn delete_leaves_cursor_untouched() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        apply_page(&mut state, full_page(0, 64));

        apply_delete_success(&mut state, "img-5");
        assert_eq!(state.offset, 32);
        assert!(state.has_more);
    }

    #[test]
    fn batch_order_follows_the_listing() {
        let mut state = GalleryState::default();
        apply_page(&mut state, page(&["zzz", "mmm", "aaa"], 3));
        select_all_visible(&mut state);
        assert_eq!(selected_in_item_order(&state), vec!["zzz", "mmm", "aaa"]);
    }

    #[test]
    fn deletions_can_empty_the_listing_for_backfill() {
        let mut state = GalleryState::default();
        assert!(begin_load(&mut state));
        apply_page(&mut state, full_page(0, 64));
        for n in 0..32 {
            apply_delete_success(&mut state, &format!("img-{n}"));
        }
        assert!(needs_backfill(&state));

        state.has_more = false;
        assert!(!needs_backfill(&state));
    }

    #[test]
    fn batch_outcome_counts_partial_failures() {
        let mut outcome = DeleteOutcome::default();
        outcome.record_success();
        outcome.record_success();
        outcome.record_failure();
        assert_eq!(outcome.succeeded, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.summary(), "Deleted 2 of 3 images, 1 failed");

        let mut clean = DeleteOutcome::default();
        clean.record_success();
        assert_eq!(clean.summary(), "Deleted 1 image");
        clean.record_success();
        assert_eq!(clean.summary(), "Deleted 2 images");
    }
}
