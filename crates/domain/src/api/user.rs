//! Signed-in console user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// May use every admin endpoint.
    Admin,
    /// Authenticated, but not allowed into the admin console.
    Guest,
}

/// The user behind the current session, as returned by `/api/v1/users/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Role of the user.
    pub role: UserRole,
    /// Display name.
    pub nickname: String,
    /// Email address.
    pub email: String,
    /// Profile picture.
    #[serde(default, rename = "photoUrl")]
    pub photo_url: Option<String>,
}

impl User {
    /// Returns true if the user may use the admin console.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_api_user() {
        let user: User = serde_json::from_value(json!({
            "id": "0193c0de-0000-7000-8000-000000000001",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-02T00:00:00Z",
            "role": "ADMIN",
            "nickname": "redshore",
            "email": "admin@example.com",
            "photoUrl": "https://example.com/me.png"
        }))
        .expect("user should decode");

        assert!(user.is_admin());
        assert_eq!(user.photo_url.as_deref(), Some("https://example.com/me.png"));
    }

    #[test]
    fn guest_is_not_admin() {
        let user: User = serde_json::from_value(json!({
            "id": "u-2",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
            "role": "GUEST",
            "nickname": "visitor",
            "email": "guest@example.com"
        }))
        .expect("user should decode");

        assert!(!user.is_admin());
        assert_eq!(user.photo_url, None);
    }
}
