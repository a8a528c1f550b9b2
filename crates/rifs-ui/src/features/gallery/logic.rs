//! Thumbnail URLs and scroll-proximity math for the gallery.
//!
//! # Design
//! - Thumbnails go through the server-side transform path so the grid
//!   never downloads originals.
//! - The near-bottom check is plain arithmetic; the view feeds it live
//!   viewport metrics.

use crate::core::logic::image_url;

/// Server-side transform applied to grid thumbnails.
const THUMBNAIL_TRANSFORM: &str = "@w400_h200_jpeg_q80";

/// Distance from the page bottom, in pixels, that arms the next page load.
pub const NEAR_BOTTOM_PX: f64 = 300.0;

/// Debounce window for scroll-position checks.
pub const SCROLL_DEBOUNCE_MS: u32 = 150;

/// Reduced thumbnail URL for grid cells.
#[must_use]
pub fn thumbnail_url(base_url: &str, hash: &str) -> String {
    format!("{}{THUMBNAIL_TRANSFORM}", image_url(base_url, hash))
}

/// Whether the viewport has scrolled close enough to the bottom to fetch
/// the next page.
#[must_use]
pub fn should_load_more(scroll_y: f64, viewport_height: f64, content_height: f64) -> bool {
    scroll_y + viewport_height + NEAR_BOTTOM_PX >= content_height
}

#[cfg(test)]
mod tests {
    use super::{NEAR_BOTTOM_PX, should_load_more, thumbnail_url};

    #[test]
    fn thumbnails_request_the_reduced_transform() {
        assert_eq!(
            thumbnail_url("http://localhost:3000/", "abc123"),
            "http://localhost:3000/images/abc123@w400_h200_jpeg_q80"
        );
    }

    #[test]
    fn near_bottom_threshold_is_inclusive() {
        let content = 2_000.0;
        let viewport = 800.0;
        let at_threshold = content - viewport - NEAR_BOTTOM_PX;
        assert!(should_load_more(at_threshold, viewport, content));
        assert!(!should_load_more(at_threshold - 1.0, viewport, content));
    }

    #[test]
    fn short_pages_always_read_as_near_bottom() {
        assert!(should_load_more(0.0, 800.0, 600.0));
    }
}
