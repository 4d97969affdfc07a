//! User Model (staff accounts)

use serde::{Deserialize, Serialize};

/// Staff role
///
/// Stored as TEXT in the database; serialized as the uppercase wire value
/// used by the frontend (`"ADMIN"`, `"MANAGER"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "UPPERCASE"))]
pub enum UserRole {
    Admin,
    Manager,
    Cashier,
    Waiter,
}

impl UserRole {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Cashier => "CASHIER",
            Self::Waiter => "WAITER",
        }
    }
}

/// User record - a staff account
///
/// The password hash never leaves the server: it is skipped during
/// serialization and present only when loaded from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    /// UUID primary key
    pub id: String,
    pub full_name: String,
    /// Login name; the staff UI uses the e-mail address here
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    /// Creation time (Unix millis)
    pub created_at: i64,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

/// Update staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub full_name: String,
    pub username: String,
    pub role: UserRole,
}

/// Staff list entry with the current shift status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub full_name: String,
    pub role: UserRole,
    pub username: String,
    pub is_active: bool,
    /// Human-readable shift status shown in the dashboard
    pub status: String,
}

/// Profile view of a user (no password hash, no activity flag)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub role: UserRole,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            full_name: user.full_name.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::from_str::<UserRole>("\"WAITER\"").unwrap(),
            UserRole::Waiter
        );
    }

    #[test]
    fn test_user_hides_password_hash() {
        let user = User {
            id: "u-1".into(),
            full_name: "Test User".into(),
            username: "test@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            role: UserRole::Manager,
            is_active: true,
            created_at: 0,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(json.contains("\"fullName\":\"Test User\""));
    }
}
