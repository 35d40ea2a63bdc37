//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{AuthToken, KittenView};

// ============================================================================
// Auth DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 注册 / 登录成功响应
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub message: &'static str,
    pub token: String,
}

impl From<AuthToken> for TokenResponse {
    fn from(auth: AuthToken) -> Self {
        Self {
            message: "success",
            token: auth.token,
        }
    }
}

// ============================================================================
// Kitten DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateKittenRequest {
    pub name: String,
    pub age: i64,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct KittenResponse {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub color: String,
}

impl From<KittenView> for KittenResponse {
    fn from(view: KittenView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            age: view.age,
            color: view.color,
        }
    }
}
