//! bank-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 启动时无法建立或 ping 通数据库连接
    #[error("Connection error: {0}")]
    Connection(String),

    /// 建表失败
    #[error("Schema initialization error: {0}")]
    SchemaInit(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 结果行无法映射为实体
    #[error("Decode error: {0}")]
    Decode(String),

    /// 语句在数据库端执行失败
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn schema_init(msg: impl Into<String>) -> Self {
        Self::SchemaInit(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 是否为启动期致命错误
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::SchemaInit(_) | Self::Config(_)
        )
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Connection(_) => 503,
            Self::SchemaInit(_) => 500,
            Self::Decode(_) => 500,
            Self::Database(_) => 500,
            Self::Config(_) => 500,
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title().to_string(),
            status: self.status_code(),
            detail: self.to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> String {
        let slug = match self {
            Self::Connection(_) => "connection",
            Self::SchemaInit(_) => "schema-init",
            Self::NotFound(_) => "not-found",
            Self::Decode(_) => "decode",
            Self::Database(_) => "database",
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
        };
        format!("{}/{}", PROBLEM_TYPE_BASE, slug)
    }

    fn problem_title(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Service Unavailable",
            Self::SchemaInit(_) => "Schema Initialization Failed",
            Self::NotFound(_) => "Resource Not Found",
            Self::Decode(_) => "Internal Server Error",
            Self::Database(_) => "Database Error",
            Self::Validation(_) => "Validation Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

const PROBLEM_TYPE_BASE: &str = "https://api.bank.local/problems";

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
