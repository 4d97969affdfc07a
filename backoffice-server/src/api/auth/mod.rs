//! Authentication API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::server::ServerState;

/// Build authentication router
/// - login / forgot-password / reset-password: public (no auth required)
/// - me / change-password / update-profile: protected (require auth)
pub fn router() -> Router<ServerState> {
    Router::new()
        // Public routes - no auth middleware applied
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/forgot-password", post(handler::forgot_password))
        .route("/api/auth/reset-password", post(handler::reset_password))
        // Protected routes - require authentication
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/change-password", post(handler::change_password))
        .route("/api/auth/update-profile", post(handler::update_profile))
}
