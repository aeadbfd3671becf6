//! 内存账户存储，用于测试和本地开发

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use bank_errors::{AppError, AppResult};
use tokio::sync::RwLock;

use crate::domain::{Account, AccountId, AccountStore, NewAccount};

#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    data: Arc<RwLock<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    accounts: BTreeMap<i32, Account>,
    /// 上一个分配的 ID，与 SERIAL 一样从 1 开始且不复用
    last_id: i32,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.data.read().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create_account(&self, account: &NewAccount) -> AppResult<Account> {
        let account = account.normalized()?;

        let mut state = self.data.write().await;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::database("Account id sequence exhausted"))?;
        state.last_id = id;

        let created = account.into_account(AccountId(id));
        state.accounts.insert(id, created.clone());
        Ok(created)
    }

    async fn update_account(&self, account: &Account) -> AppResult<()> {
        let account = account.normalized()?;

        let mut state = self.data.write().await;
        let stored = state
            .accounts
            .get_mut(&account.id.0)
            .ok_or_else(|| AppError::not_found(format!("Account {} not found", account.id)))?;

        stored.first_name = account.first_name;
        stored.last_name = account.last_name;
        stored.number = account.number;
        stored.balance = account.balance;
        Ok(())
    }

    async fn get_accounts(&self) -> AppResult<Vec<Account>> {
        Ok(self.data.read().await.accounts.values().cloned().collect())
    }

    async fn get_account_by_id(&self, id: AccountId) -> AppResult<Account> {
        self.data
            .read()
            .await
            .accounts
            .get(&id.0)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Account {} not found", id)))
    }

    async fn delete_account(&self, id: AccountId) -> AppResult<()> {
        self.data
            .write()
            .await
            .accounts
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Account {} not found", id)))
    }
}
