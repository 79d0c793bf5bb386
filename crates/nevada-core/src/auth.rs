//! Authentication records exchanged with the login endpoint.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile.
///
/// Immutable once received; replaced wholesale on login. `umkm_id` is the
/// tenant identifier scoping every resource and analytics query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umkm_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umkm_name: Option<String>,
}

impl User {
    /// True when the profile carries the admin role (case-insensitive).
    ///
    /// Admins may query any tenant; everyone else is pinned to their own
    /// `umkm_id`.
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .map(|r| r.eq_ignore_ascii_case("admin"))
            .unwrap_or(false)
    }
}

/// Successful response from `POST /api/v1/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_case_insensitive() {
        let mut user = User {
            id: "u1".into(),
            email: None,
            name: None,
            role: Some("Admin".into()),
            umkm_id: None,
            umkm_name: None,
        };
        assert!(user.is_admin());

        user.role = Some("owner".into());
        assert!(!user.is_admin());

        user.role = None;
        assert!(!user.is_admin());
    }

    #[test]
    fn test_login_response_tolerates_missing_optionals() {
        let json = r#"{"access_token":"tok","user":{"id":"u1","umkm_id":"m1"}}"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "tok");
        assert_eq!(parsed.user.umkm_id.as_deref(), Some("m1"));
        assert!(parsed.user.email.is_none());
    }
}
