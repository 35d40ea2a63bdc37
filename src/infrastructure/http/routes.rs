//! HTTP Routes
//!
//! API Endpoints:
//! - /               GET     欢迎页
//! - /register       POST    注册，返回 token
//! - /login          POST    登录，返回 token
//! - /kittens        POST    创建小猫（需认证）
//! - /kittens/:id    GET     读取小猫（需认证，仅主人）
//! - /kittens/:id    DELETE  删除小猫（需认证，仅主人）

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::auth_middleware;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .merge(kitten_routes(state))
        // 必须在所有路由注册之后设置，才会作用于每个路径
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
}

/// Kitten 路由，挂载认证中间件
fn kitten_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/kittens", post(handlers::create_kitten))
        .route(
            "/kittens/:id",
            get(handlers::get_kitten).delete(handlers::delete_kitten),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
