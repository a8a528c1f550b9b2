//! Pure form state for token creation.

use crate::core::logic::parse_optional_u64;
use rifs_api_models::{CreateTokenRequest, Role};

/// Free-text fields backing the create-token form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFormState {
    /// Operator-assigned name, required.
    pub name: String,
    /// Role select value, `"user"` or `"admin"`.
    pub role: String,
    /// Upload quota in bytes, blank means unlimited.
    pub max_upload_size: String,
}

impl Default for TokenFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: Role::User.as_str().to_string(),
            max_upload_size: String::new(),
        }
    }
}

impl TokenFormState {
    /// Parses the form into a creation request.
    ///
    /// The form never sets an expiry; the server treats the absent field
    /// as a non-expiring token.
    ///
    /// # Errors
    /// Returns a user-facing message when the name is blank or the quota
    /// is not a whole number.
    pub fn to_request(&self) -> Result<CreateTokenRequest, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Token name is required".to_string());
        }
        let max_upload_size = parse_optional_u64("Max upload size", &self.max_upload_size)?;
        Ok(CreateTokenRequest {
            name: name.to_string(),
            role: Role::from_value(&self.role),
            max_upload_size,
            expires_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TokenFormState;
    use rifs_api_models::Role;

    #[test]
    fn defaults_grant_the_user_role() {
        let form = TokenFormState::default();
        assert_eq!(form.role, "user");
    }

    #[test]
    fn blank_names_are_rejected() {
        let form = TokenFormState {
            name: "   ".to_string(),
            ..TokenFormState::default()
        };
        assert_eq!(form.to_request(), Err("Token name is required".to_string()));
    }

    #[test]
    fn complete_forms_build_a_request() {
        let form = TokenFormState {
            name: " ci uploader ".to_string(),
            role: "admin".to_string(),
            max_upload_size: "1048576".to_string(),
        };
        let request = form.to_request().expect("complete form");
        assert_eq!(request.name, "ci uploader");
        assert_eq!(request.role, Role::Admin);
        assert_eq!(request.max_upload_size, Some(1_048_576));
        assert_eq!(request.expires_at, None);
    }

    #[test]
    fn unknown_role_values_fall_back_to_user() {
        let form = TokenFormState {
            name: "viewer".to_string(),
            role: "superuser".to_string(),
            ..TokenFormState::default()
        };
        let request = form.to_request().expect("named form");
        assert_eq!(request.role, Role::User);
    }

    #[test]
    fn junk_quota_names_the_field() {
        let form = TokenFormState {
            name: "quota".to_string(),
            max_upload_size: "lots".to_string(),
            ..TokenFormState::default()
        };
        assert_eq!(
            form.to_request(),
            Err("Max upload size must be a whole number".to_string())
        );
    }
}
