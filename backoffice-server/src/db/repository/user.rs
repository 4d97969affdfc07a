//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{User, UserRole, UserUpdate};
use sqlx::SqlitePool;

const USER_COLUMNS: &str =
    "id, full_name, username, password_hash, role, is_active, created_at";

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = ? LIMIT 1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Active staff excluding administrators, ordered by full name
/// (the staff dashboard listing)
pub async fn find_staff(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users
         WHERE role != 'ADMIN' AND is_active = 1
         ORDER BY full_name, id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(users)
}

/// All active users regardless of role (salary report input)
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users
         WHERE is_active = 1
         ORDER BY full_name, id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(users)
}

/// Whether any ADMIN account exists (startup seeding check)
pub async fn has_admin(pool: &SqlitePool) -> RepoResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'ADMIN'")
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

/// Insert a new user. The caller provides a freshly generated id and an
/// already hashed password. A username collision surfaces as
/// [`RepoError::Duplicate`] via the UNIQUE index.
pub async fn create(
    pool: &SqlitePool,
    id: &str,
    full_name: &str,
    username: &str,
    password_hash: &str,
    role: UserRole,
    now: i64,
) -> RepoResult<User> {
    sqlx::query(
        "INSERT INTO users (id, full_name, username, password_hash, role, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
    )
    .bind(id)
    .bind(full_name)
    .bind(username)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

/// Update staff fields (full name, username, role)
pub async fn update(pool: &SqlitePool, id: &str, data: &UserUpdate) -> RepoResult<User> {
    let rows = sqlx::query(
        "UPDATE users SET full_name = ?1, username = ?2, role = ?3 WHERE id = ?4",
    )
    .bind(&data.full_name)
    .bind(&data.username)
    .bind(data.role)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

/// Update own profile (full name + username), password optionally included
pub async fn update_account(
    pool: &SqlitePool,
    id: &str,
    full_name: &str,
    username: &str,
    password_hash: Option<&str>,
) -> RepoResult<User> {
    let rows = sqlx::query(
        "UPDATE users SET
            full_name = ?1,
            username = ?2,
            password_hash = COALESCE(?3, password_hash)
         WHERE id = ?4",
    )
    .bind(full_name)
    .bind(username)
    .bind(password_hash)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

/// Replace the stored password hash
pub async fn update_password(pool: &SqlitePool, id: &str, password_hash: &str) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE users SET password_hash = ?1 WHERE id = ?2")
        .bind(password_hash)
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    Ok(())
}

/// Soft delete: mark the user inactive instead of removing the row
pub async fn soft_delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE users SET is_active = 0 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    Ok(())
}
