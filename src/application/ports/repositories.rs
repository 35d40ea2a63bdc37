//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::kitten::{Kitten, KittenAge, KittenColor, KittenId, KittenName};
use crate::domain::user::UserId;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}

/// 待插入的用户（id 由存储层分配）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 创建用户，用户名重复时返回 `RepositoryError::Duplicate`
    async fn create(&self, user: &NewUser) -> Result<UserRecord, RepositoryError>;

    /// 根据用户名查找
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError>;
}

// ============================================================================
// Kitten Repository
// ============================================================================

/// 小猫实体（用于持久化）
#[derive(Debug, Clone)]
pub struct KittenRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub color: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl KittenRecord {
    /// 转换为领域聚合；存储中的脏数据视为序列化错误
    pub fn into_domain(self) -> Result<Kitten, RepositoryError> {
        let corrupt = |e: crate::domain::kitten::KittenError| {
            RepositoryError::SerializationError(format!("kitten {}: {}", self.id, e))
        };
        Ok(Kitten::new(
            KittenId::new(self.id),
            KittenName::new(self.name.as_str()).map_err(corrupt)?,
            KittenAge::new(self.age).map_err(corrupt)?,
            KittenColor::new(self.color.as_str()).map_err(corrupt)?,
            UserId::new(self.owner_id),
        ))
    }
}

/// 待插入的小猫
#[derive(Debug, Clone)]
pub struct NewKitten {
    pub name: String,
    pub age: i64,
    pub color: String,
    pub owner_id: i64,
}

/// Kitten Repository Port
#[async_trait]
pub trait KittenRepositoryPort: Send + Sync {
    /// 创建小猫
    async fn create(&self, kitten: &NewKitten) -> Result<KittenRecord, RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: i64) -> Result<Option<KittenRecord>, RepositoryError>;

    /// 删除小猫，返回是否确实删除了记录
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
