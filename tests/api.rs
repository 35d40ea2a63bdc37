//! Endpoint-level tests: status codes, auth enforcement, ownership checks.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use cyber_kittens::application::TokenServicePort;
use cyber_kittens::domain::user::{UserId, Username};
use cyber_kittens::infrastructure::adapters::{BcryptPasswordHasher, JwtTokenService};
use cyber_kittens::infrastructure::http::{build_router, AppState};
use cyber_kittens::infrastructure::memory::{InMemoryKittenRepository, InMemoryUserRepository};
use cyber_kittens::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteKittenRepository, SqliteUserRepository,
};

const SECRET: &str = "integration-secret";

fn memory_app() -> Router {
    build_router(Arc::new(AppState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryKittenRepository::new()),
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::new(JwtTokenService::new(SECRET, 3600)),
    )))
}

async fn sqlite_app() -> Router {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    build_router(Arc::new(AppState::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteKittenRepository::new(pool)),
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::new(JwtTokenService::new(SECRET, 3600)),
    )))
}

struct TestResponse {
    status: StatusCode,
    body: Value,
    text: String,
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_raw(app, request).await
}

async fn send_raw(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);

    TestResponse { status, body, text }
}

/// 签名有效但指向不存在用户的令牌（如数据库重置之后）
fn token_for_unknown_user() -> String {
    JwtTokenService::new(SECRET, 3600)
        .issue(UserId::new(999), &Username::new("ghost").unwrap())
        .unwrap()
}

async fn register(app: &Router, username: &str, password: &str) -> String {
    let res = call(
        app,
        Method::POST,
        "/register",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK, "register failed: {}", res.text);
    assert_eq!(res.body["message"], "success");
    res.body["token"].as_str().unwrap().to_string()
}

async fn create_kitten(app: &Router, token: &str) -> i64 {
    let res = call(
        app,
        Method::POST,
        "/kittens",
        Some(token),
        Some(json!({ "name": "Mittens", "age": 3, "color": "calico" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED, "create failed: {}", res.text);
    res.body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn index_serves_welcome_page() {
    let app = memory_app();
    let res = call(&app, Method::GET, "/", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.text.contains("Welcome to Cyber Kittens!"));
}

#[tokio::test]
async fn unknown_route_uses_error_body() {
    let app = memory_app();
    let res = call(&app, Method::GET, "/dogs", None, None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["name"], "NotFoundError");
}

#[tokio::test]
async fn register_then_login() {
    let app = memory_app();
    register(&app, "tabby", "s3cret").await;

    let res = call(
        &app,
        Method::POST,
        "/login",
        None,
        Some(json!({ "username": "tabby", "password": "s3cret" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "success");
    assert!(res.body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn login_failures_are_401() {
    let app = memory_app();
    register(&app, "tabby", "s3cret").await;

    for (username, password) in [("tabby", "wrong"), ("ghost", "s3cret")] {
        let res = call(
            &app,
            Method::POST,
            "/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
        assert_eq!(res.body["name"], "UnauthorizedError");
    }
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = memory_app();
    register(&app, "tabby", "s3cret").await;

    let res = call(
        &app,
        Method::POST,
        "/register",
        None,
        Some(json!({ "username": "tabby", "password": "other" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn malformed_register_body_is_400() {
    let app = memory_app();
    let res = call(
        &app,
        Method::POST,
        "/register",
        None,
        Some(json!({ "username": "tabby" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["name"], "BadRequestError");
}

#[tokio::test]
async fn kitten_routes_require_identity() {
    let app = memory_app();

    let get = call(&app, Method::GET, "/kittens/1", None, None).await;
    let delete = call(&app, Method::DELETE, "/kittens/1", None, None).await;
    let create = call(
        &app,
        Method::POST,
        "/kittens",
        None,
        Some(json!({ "name": "Tom", "age": 1, "color": "grey" })),
    )
    .await;

    for res in [get, delete, create] {
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn invalid_token_is_401() {
    let app = memory_app();
    let res = call(&app, Method::GET, "/kittens/1", Some("garbage"), None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn owner_can_create_read_and_delete() {
    let app = memory_app();
    let token = register(&app, "owner", "pw").await;
    let id = create_kitten(&app, &token).await;

    let res = call(&app, Method::GET, &format!("/kittens/{}", id), Some(&token), None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "id": id, "name": "Mittens", "age": 3, "color": "calico" })
    );

    let res = call(&app, Method::DELETE, &format!("/kittens/{}", id), Some(&token), None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.text.is_empty());

    let res = call(&app, Method::GET, &format!("/kittens/{}", id), Some(&token), None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stranger_cannot_read_or_delete() {
    let app = memory_app();
    let owner = register(&app, "owner", "pw").await;
    let stranger = register(&app, "stranger", "pw").await;
    let id = create_kitten(&app, &owner).await;

    let uri = format!("/kittens/{}", id);
    let res = call(&app, Method::GET, &uri, Some(&stranger), None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = call(&app, Method::DELETE, &uri, Some(&stranger), None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    // 主人仍然可以读取
    let res = call(&app, Method::GET, &uri, Some(&owner), None).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_kitten_input_is_400() {
    let app = memory_app();
    let token = register(&app, "owner", "pw").await;

    let res = call(
        &app,
        Method::POST,
        "/kittens",
        Some(&token),
        Some(json!({ "name": "", "age": 2, "color": "black" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = call(&app, Method::GET, "/kittens/not-a-number", Some(&token), None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sqlite_backed_flow() {
    let app = sqlite_app().await;
    let owner = register(&app, "owner", "pw").await;
    let stranger = register(&app, "stranger", "pw").await;
    let id = create_kitten(&app, &owner).await;
    let uri = format!("/kittens/{}", id);

    let res = call(&app, Method::GET, &uri, Some(&stranger), None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = call(&app, Method::DELETE, &uri, Some(&owner), None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let res = call(&app, Method::DELETE, &uri, Some(&owner), None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = call(
        &app,
        Method::POST,
        "/register",
        None,
        Some(json!({ "username": "owner", "password": "again" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn wrong_method_uses_error_body() {
    let app = memory_app();

    for (method, uri) in [
        (Method::PUT, "/kittens/1"),
        (Method::GET, "/kittens"),
        (Method::GET, "/register"),
    ] {
        let res = call(&app, method.clone(), uri, None, None).await;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
        assert_eq!(res.body["name"], "MethodNotAllowedError");
        assert_eq!(res.body["error"], res.body["message"]);
    }
}

#[tokio::test]
async fn oversized_body_is_413() {
    let app = memory_app();
    let padding = "x".repeat(2 * 1024 * 1024);
    let res = call(
        &app,
        Method::POST,
        "/register",
        None,
        Some(json!({ "username": "big", "password": padding })),
    )
    .await;

    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(res.body["name"], "PayloadTooLargeError");
}

#[tokio::test]
async fn body_without_json_content_type_is_415() {
    let app = memory_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .body(Body::from(r#"{"username":"tabby","password":"pw"}"#))
        .unwrap();

    let res = send_raw(&app, request).await;
    assert_eq!(res.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(res.body["name"], "UnsupportedMediaTypeError");
}

#[tokio::test]
async fn token_for_unknown_user_cannot_create() {
    let token = token_for_unknown_user();

    for app in [memory_app(), sqlite_app().await] {
        let res = call(
            &app,
            Method::POST,
            "/kittens",
            Some(&token),
            Some(json!({ "name": "Ghost", "age": 1, "color": "white" })),
        )
        .await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
        assert_eq!(res.body["name"], "UnauthorizedError");

        // 没有留下孤儿记录
        let res = call(&app, Method::GET, "/kittens/1", Some(&token), None).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }
}
