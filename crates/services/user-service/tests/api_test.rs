//! HTTP API tests for the user service.
//!
//! Each test builds the full router over a private in-memory SQLite database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::DatabaseConfig;
use user_service_lib::create_app;
use user_service_lib::infra::Database;

async fn test_app() -> Router {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database should open");
    create_app(db.get_connection())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_user_returns_id() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post_json("/users", json!({"name": "Ada", "email": "ada@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        post_json("/users", json!({"name": "Ada", "email": "ada@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        post_json("/users", json!({"name": "Other Ada", "email": " ADA@example.com "})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let app = test_app().await;

    let (status, _) = send(&app, post_json("/users", json!({"name": "Ada"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        post_json("/users", json!({"name": "   ", "email": "ada@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        post_json("/users", json!({"name": "Ada", "email": "not-an-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = test_app().await;

    send(
        &app,
        post_json("/users", json!({"name": "Ada", "email": "ada@example.com"})),
    )
    .await;

    let (status, body) = send(&app, get("/users/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ada@example.com");

    let (status, body) = send(&app, get("/users/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_list_users_in_creation_order() {
    let app = test_app().await;

    for (name, email) in [("Ada", "ada@example.com"), ("Grace", "grace@example.com")] {
        send(&app, post_json("/users", json!({"name": name, "email": email}))).await;
    }

    let (status, body) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "Ada");
    assert_eq!(users[1]["name"], "Grace");
}

#[tokio::test]
async fn test_health_has_no_side_effects() {
    let app = test_app().await;

    for _ in 0..2 {
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    let (_, body) = send(&app, get("/users")).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
