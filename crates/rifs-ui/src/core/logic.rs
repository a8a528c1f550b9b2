//! Pure formatting and parsing helpers shared across screens, kept DOM-free
//! for non-wasm testing.

use chrono::{DateTime, Utc};

/// Characters of a content hash shown before truncation.
const SHORT_HASH_LEN: usize = 12;

/// Human-friendly byte formatter using binary steps and decimal labels.
#[must_use]
pub fn format_size(value: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;
    if value >= GB {
        let whole = value / GB;
        let tenths = (value % GB) * 10 / GB;
        format!("{whole}.{tenths} GB")
    } else if value >= MB {
        let whole = value / MB;
        let tenths = (value % MB) * 10 / MB;
        format!("{whole}.{tenths} MB")
    } else if value >= KB {
        let whole = value / KB;
        let tenths = (value % KB) * 10 / KB;
        format!("{whole}.{tenths} KB")
    } else {
        format!("{value} B")
    }
}

/// Render a server timestamp for tables and detail rows.
#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Public URL of a stored image.
#[must_use]
pub fn image_url(base_url: &str, hash: &str) -> String {
    format!("{}/images/{hash}", base_url.trim_end_matches('/'))
}

/// Abbreviate a content hash for display, keeping enough prefix to eyeball.
#[must_use]
pub fn short_hash(hash: &str) -> String {
    if hash.chars().count() <= SHORT_HASH_LEN {
        return hash.to_string();
    }
    let prefix: String = hash.chars().take(SHORT_HASH_LEN).collect();
    format!("{prefix}\u{2026}")
}

/// Parse an optional numeric form field; empty input means unset.
///
/// # Errors
/// Returns a user-facing message naming the field when the value is not a
/// non-negative integer.
pub fn parse_optional_u64(field: &str, value: &str) -> Result<Option<u64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = trimmed
        .parse::<u64>()
        .map_err(|_| format!("{field} must be a whole number"))?;
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::{format_size, format_timestamp, image_url, parse_optional_u64, short_hash};
    use chrono::{TimeZone, Utc};

    #[test]
    fn size_formatting_scales_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1_572_864), "1.5 MB");
        assert!(format_size(2_147_483_648).ends_with("GB"));
    }

    #[test]
    fn timestamps_render_to_the_minute() {
        let when = Utc.with_ymd_and_hms(2024, 3, 9, 17, 42, 9).unwrap();
        assert_eq!(format_timestamp(&when), "2024-03-09 17:42");
    }

    #[test]
    fn image_urls_normalize_the_base() {
        assert_eq!(
            image_url("http://localhost:3000/", "abc123"),
            "http://localhost:3000/images/abc123"
        );
        assert_eq!(
            image_url("http://localhost:3000", "abc123"),
            "http://localhost:3000/images/abc123"
        );
    }

    #[test]
    fn short_hash_truncates_long_digests() {
        assert_eq!(short_hash("abcdef"), "abcdef");
        let digest = "0123456789abcdef0123456789abcdef";
        let shown = short_hash(digest);
        assert!(shown.starts_with("0123456789ab"));
        assert!(shown.ends_with('\u{2026}'));
    }

    #[test]
    fn optional_u64_treats_blank_as_unset() {
        assert_eq!(parse_optional_u64("max age", ""), Ok(None));
        assert_eq!(parse_optional_u64("max age", "  "), Ok(None));
        assert_eq!(parse_optional_u64("max age", " 86400 "), Ok(Some(86_400)));
        assert!(parse_optional_u64("max age", "-1").is_err());
        assert!(parse_optional_u64("max age", "soon").is_err());
    }
}
