//! Reports API 模块 (报表)

mod handler;

use axum::{Router, middleware, routing::get};
use shared::models::UserRole;

use crate::auth::require_roles;
use crate::server::ServerState;

/// Roles allowed to view reports
const REPORT_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Manager];

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    // 报表查看：仅 ADMIN / MANAGER
    Router::new()
        .route("/revenue", get(handler::revenue))
        .route("/sales", get(handler::sales))
        .route("/salary", get(handler::salary))
        .layer(middleware::from_fn(require_roles(REPORT_ROLES)))
}
