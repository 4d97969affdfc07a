use crate::auth::JwtConfig;

/// 服务器配置 - 后台服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_PATH | backoffice.db | SQLite 数据库文件 |
/// | HTTP_PORT | 3001 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | CLIENT_URL | http://localhost:3000 | 前端地址 (重置密码链接) |
/// | CORS_ALLOWED_ORIGINS | localhost:3000,localhost:3001 | 允许的跨域来源 |
/// | EMAIL_FROM | (未设置 = 禁用邮件) | 发件人地址 (SES) |
/// | SALARY_BASE_RATE | 1000 | 每班次基础工资 |
/// | ADMIN_USERNAME | admin@localhost | 初始管理员账号 |
/// | ADMIN_PASSWORD | Admin123!@# | 初始管理员密码 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/backoffice.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 前端地址，用于构造重置密码链接
    pub client_url: String,
    /// 允许的 CORS 来源
    pub cors_allowed_origins: Vec<String>,
    /// 发件人地址；未设置时禁用邮件发送
    pub email_from: Option<String>,
    /// 每班次基础工资 (薪资报表的占位公式)
    pub salary_base_rate: f64,
    /// 初始管理员账号 (首次启动时创建)
    pub admin_username: String,
    /// 初始管理员密码
    pub admin_password: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "backoffice.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            client_url: std::env::var("CLIENT_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| {
                    vec![
                        "http://localhost:3000".into(),
                        "http://localhost:3001".into(),
                    ]
                }),
            email_from: std::env::var("EMAIL_FROM").ok(),
            salary_base_rate: std::env::var("SALARY_BASE_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000.0),
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin@localhost".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "Admin123!@#".into()),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
