//! # Session user
//!
//! [`UserInfo`] is what `GET /auth/me` returns for the signed-in visitor. The
//! backend owns the record; the client only keeps the last decoded copy inside
//! the auth context.
//!
//! [`Role`] decodes the backend's lowercase role string. Records without a role
//! are students, and roles this client does not know (the backend also has
//! `recruiter`) decode to [`Role::Other`] so they never break sign-in.

use serde::{Deserialize, Serialize};

/// Role attached to a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
    #[serde(other)]
    Other,
}

/// User information returned by the backend for the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl UserInfo {
    /// Whether this user may open the admin views.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Avatar URL, falling back to a generic placeholder of the given size.
    pub fn avatar_url(&self, size: u32) -> String {
        match self.picture.as_deref() {
            Some(picture) if !picture.is_empty() => picture.to_string(),
            _ => format!("https://via.placeholder.com/{size}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_user() {
        let json = r#"{
            "id": "user_1",
            "email": "asha@example.edu",
            "name": "Asha",
            "picture": "https://cdn.example.edu/asha.png",
            "role": "admin",
            "created_at": "2025-01-10T08:00:00+00:00"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.avatar_url(40), "https://cdn.example.edu/asha.png");
    }

    #[test]
    fn test_role_defaults_and_unknown_roles() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id": "u", "email": "e@x", "name": "N"}"#).unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.avatar_url(80), "https://via.placeholder.com/80");

        let user: UserInfo = serde_json::from_str(
            r#"{"id": "u", "email": "e@x", "name": "N", "role": "recruiter", "picture": null}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Other);
        assert!(!user.is_admin());
    }
}
