//! Index Handler

use axum::http::{Method, Uri};
use axum::response::Html;

use crate::infrastructure::http::error::ApiError;

const WELCOME_PAGE: &str = r#"
      <h1>Welcome to Cyber Kittens!</h1>
      <p>Cats are available at <a href="/kittens/1">/kittens/:id</a></p>
      <p>Create a new cat at <b><code>POST /kittens</code></b> and delete one at <b><code>DELETE /kittens/:id</code></b></p>
      <p>Log in via POST /login or register via POST /register</p>
    "#;

/// 首页
pub async fn index() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}

/// 未匹配的路由
pub async fn not_found() -> ApiError {
    ApiError::NotFound("route not found".to_string())
}

/// 路径存在但方法不匹配
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} {} is not supported", method, uri.path()))
}
