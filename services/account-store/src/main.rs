//! account-store 启动入口
//!
//! 连接数据库、确保 account 表存在，并报告当前账户数量

use account_store::startup::{connect_store, init_runtime};
use bank_config::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let config = AppConfig::load(&config_dir)?;
    init_runtime(&config);

    let store = match connect_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Failed to start account store");
            return Err(e.into());
        }
    };

    let accounts = store.count().await?;
    info!(accounts, "Schema check complete");

    store.pool().close().await;
    Ok(())
}
