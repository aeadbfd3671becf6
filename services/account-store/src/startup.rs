//! 服务启动：日志、连接池与建表

use std::time::Duration;

use bank_adapter_postgres::{PostgresConfig, SslMode, check_connection, create_pool};
use bank_config::{AppConfig, DatabaseConfig};
use bank_errors::AppResult;
use secrecy::ExposeSecret;
use tracing::info;

use crate::infrastructure::persistence::PostgresAccountStore;

/// 初始化日志
pub fn init_runtime(config: &AppConfig) {
    bank_telemetry::init(
        &config.telemetry.log_level,
        config.telemetry.json || config.is_production(),
    );

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );
}

/// 将应用配置转换为连接池配置
pub fn postgres_config(database: &DatabaseConfig, app_name: &str) -> AppResult<PostgresConfig> {
    let ssl_mode: SslMode = database.ssl_mode.parse()?;

    let config = match &database.url {
        Some(url) => PostgresConfig::from_url(url.expose_secret().as_str()),
        None => {
            let config = PostgresConfig::from_components(
                database.host.as_str(),
                database.port,
                database.name.as_str(),
                database.username.as_str(),
            );
            match &database.password {
                Some(password) => config.with_password(password.expose_secret().as_str()),
                None => config,
            }
        }
    };

    Ok(config
        .with_ssl_mode(ssl_mode)
        .with_pool(database.min_connections, database.max_connections)
        .with_acquire_timeout(Duration::from_secs(database.connect_timeout_secs))
        .with_application_name(app_name))
}

/// 连接数据库并完成建表
///
/// 任一步骤失败都是启动期致命错误（Connection / SchemaInit）。
pub async fn connect_store(config: &AppConfig) -> AppResult<PostgresAccountStore> {
    let pg_config = postgres_config(&config.database, &config.app_name)?;

    let pool = create_pool(&pg_config).await?;
    check_connection(&pool).await?;

    let store = PostgresAccountStore::new(pool);
    store.init().await?;

    info!("Account store ready");
    Ok(store)
}
