//! Initial data seeding
//!
//! Creates the first ADMIN account on a fresh database so the dashboard is
//! reachable. Credentials come from `ADMIN_USERNAME` / `ADMIN_PASSWORD`.

use shared::error::{AppError, AppResult};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::auth::password::hash_password;
use crate::db::repository::user;
use crate::server::Config;

/// Seed the initial administrator when no ADMIN account exists yet
pub async fn seed_initial_admin(pool: &SqlitePool, config: &Config) -> AppResult<()> {
    if user::has_admin(pool).await.map_err(AppError::from)? {
        tracing::debug!("Admin user already exists, skipping seed");
        return Ok(());
    }

    let password_hash = hash_password(&config.admin_password)
        .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

    let id = uuid::Uuid::new_v4().to_string();
    user::create(
        pool,
        &id,
        "System Administrator",
        &config.admin_username,
        &password_hash,
        shared::models::UserRole::Admin,
        now_millis(),
    )
    .await
    .map_err(AppError::from)?;

    tracing::info!(username = %config.admin_username, "Admin user created");
    Ok(())
}
