//! Staff Handlers

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{StaffMember, User, UserCreate, UserUpdate};
use shared::util::now_millis;

use crate::auth::password::hash_password;
use crate::db::repository::{RepoError, shift, user};
use crate::server::ServerState;
use crate::utils::time::{day_end_millis, day_start_millis};
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, validate_password, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Shift status strings shown in the staff table
const STATUS_ON_SHIFT: &str = "работает";
const STATUS_OFF_SHIFT: &str = "не на смене";

fn map_staff_error(err: RepoError) -> AppError {
    match err {
        RepoError::Duplicate(_) => AppError::with_message(
            ErrorCode::EmployeeUsernameExists,
            "Пользователь с таким email уже существует",
        ),
        RepoError::NotFound(_) => {
            AppError::with_message(ErrorCode::EmployeeNotFound, "Сотрудник не найден")
        }
        other => other.into(),
    }
}

/// GET /api/staff - active staff (administrators excluded) with their
/// current shift status
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<StaffMember>>> {
    let staff = user::find_staff(&state.pool).await?;

    // Users assigned to a shift starting today are "on shift"
    let today = chrono::Utc::now().date_naive();
    let on_shift: HashSet<String> = shift::find_on_shift_user_ids(
        &state.pool,
        day_start_millis(today),
        day_end_millis(today),
    )
    .await?
    .into_iter()
    .collect();

    let members = staff
        .iter()
        .map(|u| StaffMember {
            id: u.id.clone(),
            full_name: u.full_name.clone(),
            role: u.role,
            username: u.username.clone(),
            is_active: u.is_active,
            status: if on_shift.contains(&u.id) {
                STATUS_ON_SHIFT.to_string()
            } else {
                STATUS_OFF_SHIFT.to_string()
            },
        })
        .collect();

    Ok(Json(members))
}

/// POST /api/staff - create a staff account
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate_required_text(&payload.full_name, "fullName", MAX_NAME_LEN)?;
    validate_required_text(&payload.username, "username", MAX_EMAIL_LEN)?;
    validate_password(&payload.password, "password")?;

    let password_hash = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    // No pre-check query: the UNIQUE index on username is the authoritative
    // duplicate detection, also under concurrent creates
    let created = user::create(
        &state.pool,
        &uuid::Uuid::new_v4().to_string(),
        &payload.full_name,
        &payload.username,
        &password_hash,
        payload.role,
        now_millis(),
    )
    .await
    .map_err(map_staff_error)?;

    tracing::info!(user_id = %created.id, role = created.role.as_str(), "Staff member created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/staff/{id} - update name, login and role
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    validate_required_text(&payload.full_name, "fullName", MAX_NAME_LEN)?;
    validate_required_text(&payload.username, "username", MAX_EMAIL_LEN)?;

    let updated = user::update(&state.pool, &id, &payload)
        .await
        .map_err(map_staff_error)?;

    tracing::info!(user_id = %updated.id, "Staff member updated");

    Ok(Json(updated))
}

/// DELETE /api/staff/{id} - soft delete (marks the account inactive)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    user::soft_delete(&state.pool, &id)
        .await
        .map_err(map_staff_error)?;

    tracing::info!(user_id = %id, "Staff member deactivated");

    Ok(StatusCode::NO_CONTENT)
}
