//! Admin profile API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::get,
};

use crate::auth::require_admin;
use crate::server::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    // 管理员资料：仅 ADMIN 角色
    Router::new()
        .route(
            "/profile",
            get(handler::get_profile).put(handler::update_profile),
        )
        .layer(middleware::from_fn(require_admin))
}
