//! 账户存储 trait

use async_trait::async_trait;
use bank_errors::AppResult;

use crate::domain::account::{Account, AccountId, NewAccount};

/// 账户 CRUD 接口
///
/// 所有实现对不存在的 ID 一律返回 `AppError::NotFound`。
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 插入新账户，返回带数据库 ID 的账户
    async fn create_account(&self, account: &NewAccount) -> AppResult<Account>;

    /// 覆盖姓名、账号和余额；ID 与创建时间不可变
    async fn update_account(&self, account: &Account) -> AppResult<()>;

    /// 查询全部账户，无数据时返回空列表
    async fn get_accounts(&self) -> AppResult<Vec<Account>>;

    async fn get_account_by_id(&self, id: AccountId) -> AppResult<Account>;

    async fn delete_account(&self, id: AccountId) -> AppResult<()>;
}
