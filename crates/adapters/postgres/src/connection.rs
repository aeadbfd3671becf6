//! PostgreSQL 连接管理

use bank_errors::{AppError, AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::PostgresConfig;

/// 创建 PostgreSQL 连接池
///
/// 会立即建立一个连接，失败时返回 `AppError::Connection`。
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    let options = config.connect_options()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.pool_max)
        .min_connections(config.pool_min)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await
        .map_err(|e| AppError::connection(format!("Failed to create pool: {}", e)))?;

    info!(
        target_db = %config.display_target(),
        ssl_mode = config.ssl_mode.as_str(),
        max_connections = config.pool_max,
        "PostgreSQL connection pool created"
    );
    Ok(pool)
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::connection(format!("Database health check failed: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // 需要真实数据库：DATABASE_URL=postgres://... cargo test -- --ignored

    #[tokio::test]
    async fn test_create_pool_unreachable_host_is_connection_error() {
        let config = PostgresConfig::from_components("127.0.0.1", 1, "bank", "bank")
            .with_ssl_mode(crate::SslMode::Disable)
            .with_acquire_timeout(Duration::from_millis(500));

        let result = create_pool(&config).await;
        assert!(matches!(result, Err(AppError::Connection(_))));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn test_check_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&PostgresConfig::from_url(url))
            .await
            .expect("pool creation failed");

        check_connection(&pool).await.expect("ping failed");
    }
}
