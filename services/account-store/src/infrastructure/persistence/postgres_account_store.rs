//! PostgreSQL 账户存储实现

use async_trait::async_trait;
use bank_errors::{AppError, AppResult};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{debug, info};

use super::error_mapper::map_sqlx_error;
use crate::domain::{Account, AccountId, AccountStore, NewAccount};

const CREATE_ACCOUNT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS account (
        id          SERIAL PRIMARY KEY,
        first_name  VARCHAR(50) NOT NULL,
        last_name   VARCHAR(50) NOT NULL,
        number      BIGINT NOT NULL,
        balance     BIGINT NOT NULL DEFAULT 0,
        created_at  TIMESTAMPTZ NOT NULL
    )
"#;

pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 建表（幂等，每次启动都可调用）
    pub async fn init(&self) -> AppResult<()> {
        sqlx::query(CREATE_ACCOUNT_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::schema_init(format!("Failed to create account table: {}", e)))?;

        info!(table = "account", "Account table initialized");
        Ok(())
    }

    /// 统计账户数量
    pub async fn count(&self) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM account")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.0)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn create_account(&self, account: &NewAccount) -> AppResult<Account> {
        let account = account.normalized()?;

        let row = sqlx::query(
            r#"
            INSERT INTO account (first_name, last_name, number, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let created = scan_account(&row)?;
        debug!(account_id = %created.id, "Account created");
        Ok(created)
    }

    async fn update_account(&self, account: &Account) -> AppResult<()> {
        let account = account.normalized()?;

        let result = sqlx::query(
            r#"
            UPDATE account SET
                first_name = $2, last_name = $3, number = $4, balance = $5
            WHERE id = $1
            "#,
        )
        .bind(account.id.0)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Account {} not found", account.id)));
        }

        debug!(account_id = %account.id, "Account updated");
        Ok(())
    }

    async fn get_accounts(&self) -> AppResult<Vec<Account>> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(scan_account).collect()
    }

    async fn get_account_by_id(&self, id: AccountId) -> AppResult<Account> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => scan_account(&row),
            None => Err(AppError::not_found(format!("Account {} not found", id))),
        }
    }

    async fn delete_account(&self, id: AccountId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Account {} not found", id)));
        }

        debug!(account_id = %id, "Account deleted");
        Ok(())
    }
}

/// 按固定列序读取一行：id, first_name, last_name, number, balance, created_at
fn scan_account(row: &PgRow) -> AppResult<Account> {
    Ok(Account {
        id: AccountId(row.try_get(0).map_err(map_sqlx_error)?),
        first_name: row.try_get(1).map_err(map_sqlx_error)?,
        last_name: row.try_get(2).map_err(map_sqlx_error)?,
        number: row.try_get(3).map_err(map_sqlx_error)?,
        balance: row.try_get(4).map_err(map_sqlx_error)?,
        created_at: row.try_get(5).map_err(map_sqlx_error)?,
    })
}
