//! Server URL validation and boot-time resolution.

/// Base URL used when nothing is stored or compiled in.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Validate and canonicalize a user-entered server URL.
///
/// # Errors
/// Returns a user-facing message when the value is empty, carries
/// whitespace, lacks an `http(s)://` scheme, or names no host.
pub fn normalize_base_url(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Server URL is required".to_string());
    }
    if trimmed.contains(char::is_whitespace) {
        return Err("Server URL must not contain spaces".to_string());
    }
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| "Server URL must start with http:// or https://".to_string())?;
    if rest.trim_matches('/').is_empty() {
        return Err("Server URL needs a host".to_string());
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Resolve the effective base URL for this boot: the stored setting wins,
/// then the compile-time override, then the development default.
#[must_use]
pub fn resolve_base_url(stored: Option<&str>, compiled: Option<&str>) -> String {
    [stored, compiled]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_BASE_URL, normalize_base_url, resolve_base_url};

    #[test]
    fn normalization_canonicalizes_valid_urls() {
        assert_eq!(
            normalize_base_url(" https://img.example.com/ "),
            Ok("https://img.example.com".to_string())
        );
        assert_eq!(
            normalize_base_url("http://10.0.0.5:3000/base/"),
            Ok("http://10.0.0.5:3000/base".to_string())
        );
    }

    #[test]
    fn normalization_rejects_malformed_input() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("   ").is_err());
        assert!(normalize_base_url("img.example.com").is_err());
        assert!(normalize_base_url("ftp://img.example.com").is_err());
        assert!(normalize_base_url("http://").is_err());
        assert!(normalize_base_url("http://host with space").is_err());
    }

    #[test]
    fn resolution_prefers_stored_over_compiled() {
        assert_eq!(
            resolve_base_url(Some("http://stored:3000/"), Some("http://compiled:3000")),
            "http://stored:3000"
        );
        assert_eq!(
            resolve_base_url(None, Some("http://compiled:3000")),
            "http://compiled:3000"
        );
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_entries_fall_through() {
        assert_eq!(
            resolve_base_url(Some("  "), Some("http://compiled:3000")),
            "http://compiled:3000"
        );
        assert_eq!(resolve_base_url(Some(""), None), DEFAULT_BASE_URL);
    }
}
