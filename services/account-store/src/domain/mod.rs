//! 领域层
//!
//! 账户实体与存储接口

pub mod account;
pub mod repository;

pub use account::*;
pub use repository::*;
