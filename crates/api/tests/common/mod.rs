//! Shared helpers for API integration tests.
//!
//! Builds the application router through the same [`build_app_router`]
//! used by the production binary, so tests exercise the full middleware
//! stack (CORS, request ID, timeout, panic recovery).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use lingo_api::config::ServerConfig;
use lingo_api::router::build_app_router;
use lingo_api::state::AppState;
use lingo_db::models::user::CreateUser;
use lingo_db::repositories::UserRepo;
use lingo_events::EventBus;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. No speech provider is configured.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(EventBus::default()),
        speech: None,
    };
    build_app_router(state, &config)
}

/// Create a user row and return its id, for use in the auth header.
pub async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            display_name: "Test Learner".to_string(),
        },
    )
    .await
    .expect("failed to seed user")
    .id
}

/// Send a GET request as the given user.
pub async fn get(app: Router, user_id: i64, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("x-user-id", user_id.to_string())
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body as the given user.
pub async fn post_json(
    app: Router,
    user_id: i64,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-user-id", user_id.to_string())
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body as the given user.
pub async fn put_json(
    app: Router,
    user_id: i64,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-user-id", user_id.to_string())
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}

/// Assert a status code and return the JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
