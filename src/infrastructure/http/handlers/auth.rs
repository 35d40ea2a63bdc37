//! Auth HTTP Handlers - 注册 / 登录

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::{Login, Register};
use crate::infrastructure::http::dto::{LoginRequest, RegisterRequest, TokenResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 注册
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(req) = payload?;

    let command = Register {
        username: req.username,
        password: req.password,
    };

    let result = state.register_handler.handle(command).await?;

    Ok(Json(TokenResponse::from(result)))
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(req) = payload?;

    let command = Login {
        username: req.username,
        password: req.password,
    };

    let result = state.login_handler.handle(command).await?;

    Ok(Json(TokenResponse::from(result)))
}
