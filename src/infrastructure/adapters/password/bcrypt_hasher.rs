//! Bcrypt Password Hasher
//!
//! 实现 PasswordHasherPort trait。bcrypt 计算较慢（cost=10 约数十毫秒），
//! 因此放到 tokio 的阻塞线程池中执行。

use async_trait::async_trait;

use crate::application::ports::{PasswordError, PasswordHasherPort};
use crate::domain::user::Password;

/// 默认 cost 因子
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// bcrypt 密码哈希器
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

#[async_trait]
impl PasswordHasherPort for BcryptPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<String, PasswordError> {
        let password = password.clone();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password.expose(), cost))
            .await
            .map_err(|e| PasswordError::HashFailed(e.to_string()))?
            .map_err(|e| PasswordError::HashFailed(e.to_string()))
    }

    async fn verify(&self, password: &Password, hash: &str) -> Result<bool, PasswordError> {
        let password = password.clone();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password.expose(), &hash))
            .await
            .map_err(|e| PasswordError::VerifyFailed(e.to_string()))?
            .map_err(|e| PasswordError::VerifyFailed(e.to_string()))
    }
}
