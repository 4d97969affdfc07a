//! API 路由模块
//!
//! # 结构
//!
//! - [`auth`] - 认证相关接口 (登录、找回密码、个人资料)
//! - [`admin`] - 管理员资料接口
//! - [`reports`] - 报表接口 (营收、销售、薪资)
//! - [`staff`] - 员工管理接口
//! - [`health`] - 健康检查

pub mod admin;
pub mod auth;
pub mod health;
pub mod reports;
pub mod staff;

use serde::Serialize;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Plain `{ "message": ... }` payload used by the auth flows
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
