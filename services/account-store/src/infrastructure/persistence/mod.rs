//! 持久化实现

mod error_mapper;
mod memory_account_store;
mod postgres_account_store;

pub use error_mapper::map_sqlx_error;
pub use memory_account_store::InMemoryAccountStore;
pub use postgres_account_store::PostgresAccountStore;
