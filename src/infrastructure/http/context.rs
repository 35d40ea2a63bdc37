//! Request Context
//!
//! 认证中间件解析出的请求身份

use axum::Extension;

use super::error::ApiError;
use crate::application::TokenClaims;
use crate::domain::user::UserId;

/// 已认证用户（来自 bearer token 载荷）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
    pub username: String,
}

impl From<TokenClaims> for AuthUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            id: claims.user_id(),
            username: claims.username,
        }
    }
}

/// 要求请求已携带身份，否则 401
pub fn require_user(user: Option<Extension<AuthUser>>) -> Result<AuthUser, ApiError> {
    user.map(|Extension(user)| user)
        .ok_or_else(|| ApiError::Unauthorized("authentication required".to_string()))
}
