//! Session and access-control primitives shared across the UI.
//!
//! # Design
//! - Keep session state as plain data so the boot flow tests natively.
//! - Gate screens through one explicit capability check instead of
//!   scattered role comparisons.
//! - An unreachable auth-config endpoint resolves to "auth not required"
//!   so a misconfigured deployment stays reachable; this is a usability
//!   default, not a security control.

use rifs_api_models::{Role, UserInfo};

/// Header used when no custom auth header is configured.
pub const DEFAULT_AUTH_HEADER: &str = "Authorization";

/// Stored credentials attached to outbound API requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// Bearer-style token value.
    pub token: String,
    /// Header name carrying the token.
    pub header_name: String,
}

impl Credentials {
    /// Build credentials, falling back to the default header name when the
    /// provided one is empty.
    #[must_use]
    pub fn new(token: impl Into<String>, header_name: Option<String>) -> Self {
        let header_name = header_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTH_HEADER.to_string());
        Self {
            token: token.into(),
            header_name,
        }
    }

    /// Whether the token is usable.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Header value in bearer form, as the server expects it.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Screens reachable from the shell navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Multi-file upload form.
    Upload,
    /// Paginated image gallery.
    Gallery,
    /// Transform-cache administration.
    Cache,
    /// Access-token administration.
    Tokens,
    /// Client settings.
    Settings,
}

/// Whether a role may open a screen.
#[must_use]
pub const fn can_access(role: Role, screen: Screen) -> bool {
    match screen {
        Screen::Upload | Screen::Gallery => true,
        Screen::Cache | Screen::Tokens | Screen::Settings => matches!(role, Role::Admin),
    }
}

/// Boot progression for the session slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Probing the auth configuration.
    #[default]
    Probing,
    /// Auth is required and no usable token is stored.
    Login,
    /// Main screens are available.
    Ready,
}

/// Session slice stored in the app store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Current boot phase.
    pub phase: SessionPhase,
    /// Whether the deployment requires authentication.
    pub auth_required: bool,
    /// Active credentials, when any.
    pub credentials: Option<Credentials>,
    /// Role granted to the caller.
    pub role: Role,
    /// Display name of the token owner, when known.
    pub user_name: Option<String>,
}

/// Apply the auth-config probe result to the slice.
///
/// `enabled` is `None` when the probe failed; both a failed probe and a
/// disabled deployment grant full access so the client stays operable
/// without a backing auth setup.
pub fn apply_auth_probe(
    slice: &mut SessionSlice,
    enabled: Option<bool>,
    stored: Option<Credentials>,
) {
    match enabled {
        Some(true) => {
            slice.auth_required = true;
            match stored {
                Some(credentials) if credentials.has_token() => {
                    slice.credentials = Some(credentials);
                    // Floor until the user-info fetch refines it.
                    slice.role = Role::User;
                    slice.phase = SessionPhase::Ready;
                }
                _ => {
                    slice.credentials = None;
                    slice.phase = SessionPhase::Login;
                }
            }
        }
        Some(false) | None => {
            slice.auth_required = false;
            slice.credentials = stored;
            slice.role = Role::Admin;
            slice.phase = SessionPhase::Ready;
        }
    }
}

/// Apply the user-info fetch result after a token-backed boot.
///
/// A failed fetch keeps the session usable at the lowest role the
/// deployment grants without identification.
pub fn apply_user_info(slice: &mut SessionSlice, info: Option<UserInfo>) {
    match info {
        Some(info) => {
            slice.role = info.role;
            slice.user_name = Some(info.name);
        }
        None => {
            slice.role = if slice.auth_required {
                Role::User
            } else {
                Role::Admin
            };
            slice.user_name = None;
        }
    }
}

/// Record a successful login.
pub fn apply_login(slice: &mut SessionSlice, credentials: Credentials, role: Option<Role>) {
    slice.credentials = Some(credentials);
    slice.role = role.unwrap_or(Role::User);
    slice.phase = SessionPhase::Ready;
}

/// Clear the session on logout.
///
/// A deployment without auth keeps granting full access; there is no
/// login screen to fall back to.
pub fn apply_logout(slice: &mut SessionSlice) {
    slice.credentials = None;
    slice.user_name = None;
    if slice.auth_required {
        slice.role = Role::User;
        slice.phase = SessionPhase::Login;
    } else {
        slice.role = Role::Admin;
        slice.phase = SessionPhase::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Credentials, DEFAULT_AUTH_HEADER, Screen, SessionPhase, SessionSlice, apply_auth_probe,
        apply_login, apply_logout, apply_user_info, can_access,
    };
    use rifs_api_models::{Role, UserInfo};

    fn stored() -> Credentials {
        Credentials::new("secret-token", Some("X-Access-Token".to_string()))
    }

    #[test]
    fn failed_probe_grants_access_without_login() {
        let mut slice = SessionSlice::default();
        apply_auth_probe(&mut slice, None, None);
        assert!(!slice.auth_required);
        assert_eq!(slice.phase, SessionPhase::Ready);
        assert_eq!(slice.role, Role::Admin);
    }

    #[test]
    fn disabled_auth_keeps_stored_credentials() {
        let mut slice = SessionSlice::default();
        apply_auth_probe(&mut slice, Some(false), Some(stored()));
        assert_eq!(slice.phase, SessionPhase::Ready);
        assert_eq!(slice.role, Role::Admin);
        assert!(slice.credentials.is_some());
    }

    #[test]
    fn required_auth_without_token_lands_on_login() {
        let mut slice = SessionSlice::default();
        apply_auth_probe(&mut slice, Some(true), None);
        assert!(slice.auth_required);
        assert_eq!(slice.phase, SessionPhase::Login);
        assert_eq!(slice.credentials, None);
    }

    #[test]
    fn required_auth_with_token_floors_role_until_identified() {
        let mut slice = SessionSlice::default();
        apply_auth_probe(&mut slice, Some(true), Some(stored()));
        assert_eq!(slice.phase, SessionPhase::Ready);
        assert_eq!(slice.role, Role::User);

        apply_user_info(
            &mut slice,
            Some(UserInfo {
                name: "ops".to_string(),
                role: Role::Admin,
            }),
        );
        assert_eq!(slice.role, Role::Admin);
        assert_eq!(slice.user_name.as_deref(), Some("ops"));
    }

    #[test]
    fn failed_user_info_floors_by_auth_requirement() {
        let mut slice = SessionSlice::default();
        apply_auth_probe(&mut slice, Some(true), Some(stored()));
        apply_user_info(&mut slice, None);
        assert_eq!(slice.role, Role::User);

        let mut open = SessionSlice::default();
        apply_auth_probe(&mut open, Some(false), Some(stored()));
        apply_user_info(&mut open, None);
        assert_eq!(open.role, Role::Admin);
    }

    #[test]
    fn login_and_logout_round_trip() {
        let mut slice = SessionSlice::default();
        apply_auth_probe(&mut slice, Some(true), None);
        apply_login(&mut slice, stored(), Some(Role::Admin));
        assert_eq!(slice.phase, SessionPhase::Ready);
        assert_eq!(slice.role, Role::Admin);

        apply_logout(&mut slice);
        assert_eq!(slice.phase, SessionPhase::Login);
        assert_eq!(slice.credentials, None);
        assert_eq!(slice.role, Role::User);
    }

    #[test]
    fn logout_stays_ready_when_auth_disabled() {
        let mut slice = SessionSlice::default();
        apply_auth_probe(&mut slice, Some(false), Some(stored()));
        apply_logout(&mut slice);
        assert_eq!(slice.phase, SessionPhase::Ready);
        assert_eq!(slice.role, Role::Admin);
    }

    #[test]
    fn admin_screens_require_admin_role() {
        for screen in [Screen::Upload, Screen::Gallery] {
            assert!(can_access(Role::User, screen));
            assert!(can_access(Role::Admin, screen));
        }
        for screen in [Screen::Cache, Screen::Tokens, Screen::Settings] {
            assert!(!can_access(Role::User, screen));
            assert!(can_access(Role::Admin, screen));
        }
    }

    #[test]
    fn credentials_fall_back_to_default_header() {
        let plain = Credentials::new("abc", None);
        assert_eq!(plain.header_name, DEFAULT_AUTH_HEADER);
        let blank = Credentials::new("abc", Some("   ".to_string()));
        assert_eq!(blank.header_name, DEFAULT_AUTH_HEADER);
        let custom = Credentials::new("abc", Some("X-Access-Token".to_string()));
        assert_eq!(custom.header_name, "X-Access-Token");
        assert_eq!(custom.header_value(), "Bearer abc");
        assert!(!Credentials::new("   ", None).has_token());
    }
}
