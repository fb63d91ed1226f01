#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use notebook::router::init_router;
use notebook::state::AppState;
use notebook_config::{JwtConfig, PasswordConfig};

pub const TEST_SECRET: &str = "integration-test-secret-key";
pub const TEST_PASSWORD: &str = "secret123";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

/// Router over fresh in-memory storage. bcrypt runs at its minimum cost.
pub fn setup_test_app() -> Router {
    let state = AppState::in_memory(test_jwt_config(), PasswordConfig::with_cost(4));
    init_router(state)
}

pub fn generate_unique_email() -> String {
    let email: String = SafeEmail().fake();
    format!("{}.{}", Uuid::new_v4().simple(), email)
}

pub fn generate_name() -> String {
    Name().fake()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Sends one request. `token` goes into `Authorization: Bearer`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    into_test_response(app.clone().oneshot(request).await.unwrap()).await
}

pub async fn into_test_response(response: axum::response::Response) -> TestResponse {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    TestResponse { status, body }
}

/// Registers a user with [`TEST_PASSWORD`] and returns their token.
pub async fn register(app: &Router, email: &str) -> String {
    let response = send(
        app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "name": generate_name(),
            "email": email,
            "password": TEST_PASSWORD,
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK, "register failed: {}", response.body);
    response.body["authToken"].as_str().unwrap().to_string()
}

pub async fn register_new_user(app: &Router) -> String {
    register(app, &generate_unique_email()).await
}

pub async fn create_note(app: &Router, token: &str, title: &str, description: &str) -> Value {
    let response = send(
        app,
        "POST",
        "/notes",
        Some(token),
        Some(json!({ "title": title, "description": description })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK, "create failed: {}", response.body);
    response.body
}
