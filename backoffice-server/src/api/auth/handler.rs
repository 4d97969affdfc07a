//! Authentication Handlers
//!
//! Login, password recovery and own-profile management.

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use shared::models::UserProfile;
use shared::util::now_millis;

use crate::api::MessageResponse;
use crate::auth::CurrentUser;
use crate::auth::password::{hash_password, verify_password};
use crate::db::repository::{password_reset, user};
use crate::server::ServerState;
use crate::services::email;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, validate_password, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Reset tokens live for one hour
const RESET_TOKEN_TTL_MS: i64 = 3_600_000;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::validation(
            "Необходимо указать имя пользователя и пароль",
        ));
    }

    let found = user::find_by_username(&state.pool, &req.username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let found = match found {
        Some(u) => {
            // Soft-deleted staff cannot sign in
            if !u.is_active {
                return Err(AppError::with_message(
                    ErrorCode::AccountDisabled,
                    "Учетная запись отключена",
                ));
            }

            let password_valid = verify_password(&req.password, &u.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(username = %req.username, "Login failed - invalid credentials");
                return Err(AppError::with_message(
                    ErrorCode::InvalidCredentials,
                    "Неверные учетные данные",
                ));
            }

            u
        }
        None => {
            tracing::warn!(username = %req.username, "Login failed - user not found");
            return Err(AppError::with_message(
                ErrorCode::InvalidCredentials,
                "Неверные учетные данные",
            ));
        }
    };

    let token = state
        .jwt_service()
        .generate_token(&found.id, found.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(
        user_id = %found.id,
        role = found.role.as_str(),
        "User logged in successfully"
    );

    Ok(Json(LoginResponse { token }))
}

/// Get current user info
///
/// The frontend keeps its session from this endpoint instead of a local
/// singleton, so role or name changes become visible on refresh.
pub async fn me(
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
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

/// Change own password
pub async fn change_password(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    if req.current_password.is_empty() || req.new_password.is_empty() {
        return Err(AppError::validation(
            "Необходимо указать текущий и новый пароль",
        ));
    }
    validate_password(&req.new_password, "newPassword")?;

    let found = user::find_by_id(&state.pool, &current_user.id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::EmployeeNotFound, "Пользователь не найден")
        })?;

    let password_valid = verify_password(&req.current_password, &found.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        return Err(AppError::with_message(
            ErrorCode::InvalidCredentials,
            "Неверный текущий пароль",
        ));
    }

    let password_hash = hash_password(&req.new_password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
    user::update_password(&state.pool, &found.id, &password_hash).await?;

    tracing::info!(user_id = %found.id, "Password changed");

    Ok(Json(MessageResponse::new("Пароль успешно изменен")))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
}

/// Update own profile (e-mail doubles as the login name)
pub async fn update_profile(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    validate_required_text(&req.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&req.full_name, "fullName", MAX_NAME_LEN)?;

    let updated = user::update_account(
        &state.pool,
        &current_user.id,
        &req.full_name,
        &req.email,
        None,
    )
    .await
    .map_err(map_profile_error)?;

    Ok(Json(UserProfile::from(&updated)))
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

/// Neutral response used whether or not the account exists
const FORGOT_PASSWORD_MESSAGE: &str =
    "Если указанный email существует, на него будет отправлена инструкция по восстановлению пароля";

/// Request a password reset
///
/// Always answers with the same neutral message so the endpoint cannot be
/// used to probe which e-mail addresses have accounts.
pub async fn forgot_password(
    State(state): State<ServerState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    if req.email.trim().is_empty() {
        return Err(AppError::validation("Email обязателен"));
    }

    let Some(found) = user::find_by_username(&state.pool, &req.email).await? else {
        return Ok(Json(MessageResponse::new(FORGOT_PASSWORD_MESSAGE)));
    };

    let token = generate_reset_token()
        .map_err(|e| AppError::internal(format!("Failed to generate reset token: {e}")))?;
    let now = now_millis();
    password_reset::create(
        &state.pool,
        &uuid::Uuid::new_v4().to_string(),
        &token,
        &found.id,
        now + RESET_TOKEN_TTL_MS,
        now,
    )
    .await?;

    tracing::info!(user_id = %found.id, "Password reset token created");

    match (&state.ses, &state.config.email_from) {
        (Some(ses), Some(from)) => {
            let reset_link = format!("{}/reset-password/{}", state.config.client_url, token);
            email::send_password_reset_email(ses, from, &req.email, &reset_link)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Failed to send reset e-mail");
                    AppError::with_message(ErrorCode::EmailSendFailed, "Ошибка при отправке email")
                })?;
        }
        _ => {
            tracing::warn!("E-mail disabled, reset token created but not delivered");
        }
    }

    Ok(Json(MessageResponse::new(FORGOT_PASSWORD_MESSAGE)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub new_password: String,
}

/// Redeem a password reset token
pub async fn reset_password(
    State(state): State<ServerState>,
    Json(req): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    if req.token.is_empty() || req.new_password.is_empty() {
        return Err(AppError::validation("Токен и новый пароль обязательны"));
    }
    validate_password(&req.new_password, "newPassword")?;

    let invalid_token =
        || AppError::with_message(ErrorCode::ResetTokenInvalid, "Недействительный или просроченный токен");

    let reset = password_reset::find_by_token(&state.pool, &req.token)
        .await?
        .ok_or_else(invalid_token)?;

    if reset.used {
        return Err(AppError::with_message(
            ErrorCode::ResetTokenUsed,
            "Недействительный или просроченный токен",
        ));
    }
    if reset.expires_at < now_millis() {
        return Err(AppError::with_message(
            ErrorCode::ResetTokenExpired,
            "Недействительный или просроченный токен",
        ));
    }

    let password_hash = hash_password(&req.new_password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
    user::update_password(&state.pool, &reset.user_id, &password_hash).await?;
    password_reset::mark_used(&state.pool, &reset.id).await?;

    tracing::info!(user_id = %reset.user_id, "Password reset completed");

    Ok(Json(MessageResponse::new("Пароль успешно изменен")))
}

/// 32 random bytes, hex encoded
fn generate_reset_token() -> Result<String, ring::error::Unspecified> {
    let rng = SystemRandom::new();
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes)?;
    Ok(hex::encode(bytes))
}

/// Map repository errors of the profile flows to their product messages
fn map_profile_error(err: crate::db::repository::RepoError) -> AppError {
    use crate::db::repository::RepoError;
    match err {
        RepoError::Duplicate(_) => AppError::with_message(
            ErrorCode::EmployeeUsernameExists,
            "Этот email уже используется",
        ),
        RepoError::NotFound(_) => {
            AppError::with_message(ErrorCode::EmployeeNotFound, "Пользователь не найден")
        }
        other => other.into(),
    }
}
