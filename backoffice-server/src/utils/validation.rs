//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so the limits live here.

use super::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Person and menu item names
pub const MAX_NAME_LEN: usize = 200;

/// Login names / e-mail addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length accepted on create/reset
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a password payload before hashing.
pub fn validate_password(value: &str, field: &str) -> Result<(), AppError> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "{field} is too short (min {MIN_PASSWORD_LEN} chars)"
        )));
    }
    if value.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {MAX_PASSWORD_LEN})",
            value.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Иван Петров", "fullName", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "fullName", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "fullName", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(MAX_NAME_LEN + 1), "fullName", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_password_limits() {
        assert!(validate_password("secret1", "password").is_ok());
        assert!(validate_password("short", "password").is_err());
        assert!(validate_password(&"x".repeat(MAX_PASSWORD_LEN + 1), "password").is_err());
    }
}
