//! Pure form state for the cache maintenance panel.

use crate::core::logic::parse_optional_u64;
use rifs_api_models::CacheCleanRequest;

/// Free-text fields backing the targeted-clean form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanFormState {
    /// Age bound in seconds.
    pub max_age: String,
    /// Size bound in bytes.
    pub max_size: String,
}

impl CleanFormState {
    /// Parses the form into a request, requiring at least one bound.
    ///
    /// # Errors
    /// Returns a user-facing message when a field is not a whole number or
    /// when both bounds are blank.
    pub fn to_request(&self) -> Result<CacheCleanRequest, String> {
        let max_age = parse_optional_u64("Max age", &self.max_age)?;
        let max_size = parse_optional_u64("Max size", &self.max_size)?;
        if max_age.is_none() && max_size.is_none() {
            return Err("Provide a max age or a max size".to_string());
        }
        Ok(CacheCleanRequest { max_age, max_size })
    }
}

#[cfg(test)]
mod tests {
    use super::CleanFormState;

    #[test]
    fn blank_forms_are_rejected() {
        let form = CleanFormState::default();
        assert_eq!(
            form.to_request(),
            Err("Provide a max age or a max size".to_string())
        );
    }

    #[test]
    fn one_bound_is_enough() {
        let form = CleanFormState {
            max_age: " 86400 ".to_string(),
            max_size: String::new(),
        };
        let request = form.to_request().expect("one bound set");
        assert_eq!(request.max_age, Some(86_400));
        assert_eq!(request.max_size, None);
    }

    #[test]
    fn both_bounds_pass_through() {
        let form = CleanFormState {
            max_age: "3600".to_string(),
            max_size: "1048576".to_string(),
        };
        let request = form.to_request().expect("both bounds set");
        assert_eq!(request.max_age, Some(3_600));
        assert_eq!(request.max_size, Some(1_048_576));
    }

    #[test]
    fn junk_names_the_offending_field() {
        let form = CleanFormState {
            max_age: "soon".to_string(),
            max_size: String::new(),
        };
        assert_eq!(
            form.to_request(),
            Err("Max age must be a whole number".to_string())
        );
    }
}
