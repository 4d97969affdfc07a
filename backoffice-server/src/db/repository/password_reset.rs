//! Password reset token Repository

use super::{RepoError, RepoResult};
use shared::models::PasswordResetToken;
use sqlx::SqlitePool;

pub async fn create(
    pool: &SqlitePool,
    id: &str,
    token: &str,
    user_id: &str,
    expires_at: i64,
    now: i64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO password_reset_tokens (id, token, user_id, used, expires_at, created_at)
         VALUES (?1, ?2, ?3, 0, ?4, ?5)",
    )
    .bind(id)
    .bind(token)
    .bind(user_id)
    .bind(expires_at)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_token(
    pool: &SqlitePool,
    token: &str,
) -> RepoResult<Option<PasswordResetToken>> {
    let row = sqlx::query_as::<_, PasswordResetToken>(
        "SELECT id, token, user_id, used, expires_at, created_at
         FROM password_reset_tokens WHERE token = ? LIMIT 1",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Mark a token redeemed so it cannot be replayed
pub async fn mark_used(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE password_reset_tokens SET used = 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reset token {id} not found")));
    }
    Ok(())
}
