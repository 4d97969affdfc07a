//! Admin profile Handlers

use axum::{Extension, Json, extract::State};
use serde::Deserialize;
use shared::models::UserProfile;

use crate::auth::CurrentUser;
use crate::auth::password::hash_password;
use crate::db::repository::{RepoError, user};
use crate::server::ServerState;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, validate_password, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/admin/profile - own profile of the administrator
pub async fn get_profile(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<UserProfile>> {
    let found = user::find_by_id(&state.pool, &current_user.id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::EmployeeNotFound, "Пользователь не найден")
        })?;

    Ok(Json(UserProfile::from(&found)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileUpdate {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub username: String,
    /// Optional password change
    pub password: Option<String>,
}

/// PUT /api/admin/profile - update own fullName/username/password
pub async fn update_profile(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<AdminProfileUpdate>,
) -> AppResult<Json<UserProfile>> {
    validate_required_text(&req.full_name, "fullName", MAX_NAME_LEN)?;
    validate_required_text(&req.username, "username", MAX_EMAIL_LEN)?;

    let password_hash = match &req.password {
        Some(password) => {
            validate_password(password, "password")?;
            Some(
                hash_password(password)
                    .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?,
            )
        }
        None => None,
    };

    let updated = user::update_account(
        &state.pool,
        &current_user.id,
        &req.full_name,
        &req.username,
        password_hash.as_deref(),
    )
    .await
    .map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::with_message(
            ErrorCode::EmployeeUsernameExists,
            "Пользователь с таким email уже существует",
        ),
        RepoError::NotFound(_) => {
            AppError::with_message(ErrorCode::EmployeeNotFound, "Пользователь не найден")
        }
        other => other.into(),
    })?;

    tracing::info!(user_id = %updated.id, "Admin profile updated");

    Ok(Json(UserProfile::from(&updated)))
}
