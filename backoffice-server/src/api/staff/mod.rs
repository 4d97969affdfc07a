//! Staff management API 模块 (员工管理)

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use shared::models::UserRole;

use crate::auth::{require_admin, require_roles};
use crate::server::ServerState;

/// Roles allowed to read the staff listing
const STAFF_READ_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Manager];

pub fn router() -> Router<ServerState> {
    routes()
}

fn routes() -> Router<ServerState> {
    // 列表：ADMIN / MANAGER；增删改：仅 ADMIN
    let read = Router::new()
        .route("/api/staff/", get(handler::list))
        .layer(middleware::from_fn(require_roles(STAFF_READ_ROLES)));

    let write = Router::new()
        .route("/api/staff/", post(handler::create))
        .route("/api/staff/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    read.merge(write)
}
