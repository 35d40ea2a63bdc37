//! Kitten HTTP Handlers
//!
//! 三个接口都要求已认证；读取和删除额外要求请求者是主人。

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use crate::application::{CreateKitten, DeleteKitten, GetKitten};
use crate::domain::kitten::KittenId;
use crate::infrastructure::http::context::{require_user, AuthUser};
use crate::infrastructure::http::dto::{CreateKittenRequest, KittenResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 读取小猫
pub async fn get_kitten(
    State(state): State<Arc<AppState>>,
    user: Option<Extension<AuthUser>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<KittenResponse>, ApiError> {
    let user = require_user(user)?;
    let Path(id) = id?;

    let query = GetKitten {
        requester: user.id,
        kitten_id: KittenId::new(id),
    };

    let result = state.get_kitten_handler.handle(query).await?;

    Ok(Json(KittenResponse::from(result)))
}

/// 创建小猫
pub async fn create_kitten(
    State(state): State<Arc<AppState>>,
    user: Option<Extension<AuthUser>>,
    payload: Result<Json<CreateKittenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<KittenResponse>), ApiError> {
    let user = require_user(user)?;
    let Json(req) = payload?;

    let command = CreateKitten {
        requester: user.id,
        name: req.name,
        age: req.age,
        color: req.color,
    };

    let result = state.create_kitten_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(KittenResponse::from(result))))
}

/// 删除小猫
pub async fn delete_kitten(
    State(state): State<Arc<AppState>>,
    user: Option<Extension<AuthUser>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let user = require_user(user)?;
    let Path(id) = id?;

    let command = DeleteKitten {
        requester: user.id,
        kitten_id: KittenId::new(id),
    };

    state.delete_kitten_handler.handle(command).await?;

    Ok(StatusCode::NO_CONTENT)
}
