//! HTTP Middleware
//!
//! - 认证中间件：可选地把 bearer token 解析为请求身份
//! - HTTP 状态码错误日志中间件

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue},
    middleware::Next,
    response::Response,
};

use super::context::AuthUser;
use super::error::ApiError;
use super::state::AppState;
use crate::application::{TokenError, TokenServicePort};

/// 认证中间件
///
/// - 没有 `Authorization` 头：不附加身份，直接放行
/// - 有头：按空白切分，取第二段作为 token 校验；成功则把 `AuthUser`
///   放进 request extensions，失败返回 401
///
/// 是否必须登录由各 handler 自行判断。
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(header) = request.headers().get(AUTHORIZATION) {
        let user = authenticate(state.tokens.as_ref(), header)?;
        tracing::debug!(user_id = %user.id, "Request authenticated");
        request.extensions_mut().insert(user);
    }

    Ok(next.run(request).await)
}

fn authenticate(tokens: &dyn TokenServicePort, header: &HeaderValue) -> Result<AuthUser, ApiError> {
    let value = header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("authorization header is not valid ASCII".to_string()))?;

    let token = value
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ApiError::Unauthorized("malformed authorization header".to_string()))?;

    let claims = tokens.verify(token).map_err(|e| match e {
        TokenError::Expired => ApiError::Unauthorized("token expired".to_string()),
        other => ApiError::Unauthorized(other.to_string()),
    })?;

    Ok(AuthUser::from(claims))
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
/// 错误原因在 ApiError::into_response() 中记录，这里只记录请求行
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
