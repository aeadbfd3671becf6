//! account-store - 账户持久化层
//!
//! `AccountStore` 定义账户的增删改查接口，`PostgresAccountStore` 为 PostgreSQL 实现，
//! `InMemoryAccountStore` 用于测试。

pub mod domain;
pub mod infrastructure;
pub mod startup;

pub use domain::{Account, AccountId, AccountStore, NewAccount};
pub use infrastructure::persistence::{InMemoryAccountStore, PostgresAccountStore};
