//! PostgreSQL 配置模块
//!
//! 提供连接所需的全部参数：主机、凭据、数据库名、SSL 模式和连接池设置

use std::str::FromStr;
use std::time::Duration;

use bank_errors::{AppError, AppResult};
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// SSL 模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    /// 禁用 SSL
    Disable,
    /// 允许 SSL（如果服务器支持）
    #[default]
    Prefer,
    /// 要求 SSL
    Require,
    /// 验证 CA 证书
    VerifyCa,
    /// 验证完整证书链
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }

    fn to_pg(self) -> PgSslMode {
        match self {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
            SslMode::VerifyCa => PgSslMode::VerifyCa,
            SslMode::VerifyFull => PgSslMode::VerifyFull,
        }
    }
}

impl FromStr for SslMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" | "verify_ca" => Ok(SslMode::VerifyCa),
            "verify-full" | "verify_full" => Ok(SslMode::VerifyFull),
            other => Err(AppError::config(format!("Unknown ssl mode: {}", other))),
        }
    }
}

/// PostgreSQL 配置
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// 完整连接 URL，设置后忽略 host/port/database/username/password
    pub url: Option<Secret<String>>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: Option<Secret<String>>,
    pub ssl_mode: SslMode,
    /// 应用名称（用于连接标识）
    pub application_name: Option<String>,

    // 连接池配置
    pub pool_min: u32,
    pub pool_max: u32,
    /// 获取连接超时
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    /// 连接最大生命周期
    pub max_lifetime: Option<Duration>,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            username: "postgres".to_string(),
            password: None,
            ssl_mode: SslMode::default(),
            application_name: None,
            pool_min: 1,
            pool_max: 5,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }
}

impl PostgresConfig {
    /// 从 URL 创建配置
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(Secret::new(url.into())),
            ..Default::default()
        }
    }

    /// 从组件创建配置
    pub fn from_components(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Secret::new(password.into()));
        self
    }

    pub fn with_ssl_mode(mut self, mode: SslMode) -> Self {
        self.ssl_mode = mode;
        self
    }

    /// 设置连接池配置
    pub fn with_pool(mut self, min: u32, max: u32) -> Self {
        self.pool_min = min;
        self.pool_max = max;
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// 生成 sqlx 连接参数
    ///
    /// URL 中已有的 sslmode 会被显式配置的 SSL 模式覆盖。
    pub fn connect_options(&self) -> AppResult<PgConnectOptions> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url.expose_secret())
                .map_err(|e| AppError::config(format!("Invalid database url: {}", e)))?,
            None => {
                let options = PgConnectOptions::new()
                    .host(&self.host)
                    .port(self.port)
                    .database(&self.database)
                    .username(&self.username);
                match &self.password {
                    Some(password) => options.password(password.expose_secret()),
                    None => options,
                }
            }
        };

        let options = options.ssl_mode(self.ssl_mode.to_pg());

        Ok(match &self.application_name {
            Some(name) => options.application_name(name),
            None => options,
        })
    }

    /// 用于日志的目标描述（不含凭据）
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(_) => "<url>".to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.database),
        }
    }
}
