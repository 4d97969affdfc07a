use std::sync::Arc;

use aws_sdk_sesv2::Client as SesClient;
use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::db::{DbService, seed};
use crate::server::Config;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是服务的核心数据结构。使用 Arc / 连接池实现浅拷贝，
/// 克隆成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | ses | Option<SesClient> | SES 邮件客户端 (未配置时为 None) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// SES 邮件客户端
    pub ses: Option<SesClient>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试场景常用)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(
        config: Config,
        pool: SqlitePool,
        jwt_service: Arc<JwtService>,
        ses: Option<SesClient>,
    ) -> Self {
        Self {
            config,
            pool,
            jwt_service,
            ses,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库 (连接池 + 迁移)
    /// 2. 初始管理员账号
    /// 3. JWT 服务
    /// 4. SES 邮件客户端 (仅当 EMAIL_FROM 已配置)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        // 1. Initialize DB
        let db_service = DbService::new(&config.database_path)
            .await
            .expect("Failed to initialize database");
        let pool = db_service.pool;

        // 2. Seed the first admin account on a fresh database
        seed::seed_initial_admin(&pool, config)
            .await
            .expect("Failed to seed initial admin user");

        // 3. JWT service
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        // 4. SES client, only when a sender address is configured
        let ses = if config.email_from.is_some() {
            let aws_config =
                aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            Some(SesClient::new(&aws_config))
        } else {
            tracing::warn!("EMAIL_FROM not set, password reset e-mails are disabled");
            None
        };

        Self::new(config.clone(), pool, jwt_service, ses)
    }

    /// 获取 JWT 服务
    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
