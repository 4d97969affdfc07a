//! Samovar Back Office Server - 餐厅后台管理服务
//!
//! # 架构概述
//!
//! 本模块是后台服务的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): SQLite 存储 (WAL) 与 repository 查询层
//! - **报表引擎** (`reports`): 营收 / 销售 / 薪资聚合 (纯函数)
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **HTTP API** (`api`): RESTful API 接口
//! - **邮件** (`services`): 找回密码邮件 (SES)
//!
//! # 模块结构
//!
//! ```text
//! backoffice-server/src/
//! ├── server/        # 配置、状态、路由组装
//! ├── auth/          # JWT 认证、角色检查
//! ├── api/           # HTTP 路由和处理器
//! ├── reports/       # 报表聚合引擎
//! ├── db/            # 数据库层
//! ├── services/      # 邮件等外部服务
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod db;
pub mod reports;
pub mod server;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use server::{Config, Server, ServerState, build_app};

// Re-export unified error types from shared
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
