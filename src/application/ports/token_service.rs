//! Token Service Port
//!
//! 签发 / 校验 bearer token

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::{UserId, Username};

/// Token 载荷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 用户 ID
    pub id: i64,
    /// 用户名
    pub username: String,
    /// 签发时间（Unix 秒）
    pub iat: i64,
    /// 过期时间（Unix 秒）
    pub exp: i64,
}

impl TokenClaims {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Token Service Port
pub trait TokenServicePort: Send + Sync {
    /// 为用户签发 token
    fn issue(&self, user_id: UserId, username: &Username) -> Result<String, TokenError>;

    /// 校验 token 并解出载荷
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
