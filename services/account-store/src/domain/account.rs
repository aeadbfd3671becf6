//! 账户实体

use bank_errors::{AppError, AppResult};
use chrono::{DateTime, SubsecRound, Utc};
use derive_more::{Display, From};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 姓名字段最大长度，与表结构 VARCHAR(50) 一致
pub const MAX_NAME_LEN: usize = 50;

/// 账号取值上限（不含）
pub const ACCOUNT_NUMBER_UPPER: i64 = 1_000_000;

/// 账户 ID，由数据库自增生成
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct AccountId(pub i32);

impl AccountId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// 待创建的账户，尚未分配 ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// 创建新账户：随机生成账号，余额为 0
    pub fn new(first_name: &str, last_name: &str) -> AppResult<Self> {
        Ok(Self {
            first_name: validate_name("first_name", first_name)?,
            last_name: validate_name("last_name", last_name)?,
            number: generate_account_number(),
            balance: 0,
            created_at: now(),
        })
    }

    /// 设置开户余额
    pub fn with_balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_number(mut self, number: i64) -> Self {
        self.number = number;
        self
    }

    /// 设置创建时间（截断到微秒，与 TIMESTAMPTZ 精度一致）
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at.trunc_subsecs(6);
        self
    }

    /// 按构造规则重新校验并规整（去空白、长度、时间精度）
    ///
    /// 字段是公开的，存储实现写入前都应调用此方法。
    pub fn normalized(&self) -> AppResult<Self> {
        Ok(Self {
            first_name: validate_name("first_name", &self.first_name)?,
            last_name: validate_name("last_name", &self.last_name)?,
            number: self.number,
            balance: self.balance,
            created_at: self.created_at.trunc_subsecs(6),
        })
    }

    /// 绑定数据库分配的 ID
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            number: self.number,
            balance: self.balance,
            created_at: self.created_at,
        }
    }
}

/// 账户实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// 修改姓名
    pub fn rename(&mut self, first_name: &str, last_name: &str) -> AppResult<()> {
        let first_name = validate_name("first_name", first_name)?;
        let last_name = validate_name("last_name", last_name)?;
        self.first_name = first_name;
        self.last_name = last_name;
        Ok(())
    }

    /// 校验可变字段，返回规整后的副本
    pub fn normalized(&self) -> AppResult<Self> {
        Ok(Self {
            first_name: validate_name("first_name", &self.first_name)?,
            last_name: validate_name("last_name", &self.last_name)?,
            created_at: self.created_at.trunc_subsecs(6),
            ..self.clone()
        })
    }
}

fn validate_name(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{} must not be empty", field)));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LEN
        )));
    }
    Ok(value.to_string())
}

/// 生成账号
pub fn generate_account_number() -> i64 {
    rand::thread_rng().gen_range(0..ACCOUNT_NUMBER_UPPER)
}

fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
