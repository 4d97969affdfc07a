//! Password reset token Model

use serde::{Deserialize, Serialize};

/// Single-use password reset token
///
/// Created by the forgot-password flow (32 random bytes, hex encoded),
/// valid for one hour, marked `used` after a successful reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PasswordResetToken {
    /// UUID primary key
    pub id: String,
    pub token: String,
    pub user_id: String,
    pub used: bool,
    pub expires_at: i64,
    pub created_at: i64,
}

impl PasswordResetToken {
    /// Whether the token is still redeemable at `now` (Unix millis)
    pub fn is_valid(&self, now: i64) -> bool {
        !self.used && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(used: bool, expires_at: i64) -> PasswordResetToken {
        PasswordResetToken {
            id: "t-1".into(),
            token: "abc".into(),
            user_id: "u-1".into(),
            used,
            expires_at,
            created_at: 0,
        }
    }

    #[test]
    fn test_valid_token() {
        assert!(token(false, 2_000).is_valid(1_000));
    }

    #[test]
    fn test_used_token_rejected() {
        assert!(!token(true, 2_000).is_valid(1_000));
    }

    #[test]
    fn test_expired_token_rejected() {
        assert!(!token(false, 500).is_valid(1_000));
    }
}
