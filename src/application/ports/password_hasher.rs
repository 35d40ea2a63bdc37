//! Password Hasher Port
//!
//! 密码哈希与校验的抽象；实现放在 infrastructure/adapters/password

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::Password;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashFailed(String),

    #[error("Failed to verify password: {0}")]
    VerifyFailed(String),
}

/// Password Hasher Port
///
/// 哈希计算是 CPU 密集型操作，实现方需要保证不阻塞异步运行时。
#[async_trait]
pub trait PasswordHasherPort: Send + Sync {
    /// 计算密码哈希
    async fn hash(&self, password: &Password) -> Result<String, PasswordError>;

    /// 校验密码是否与哈希匹配
    async fn verify(&self, password: &Password, hash: &str) -> Result<bool, PasswordError>;
}
