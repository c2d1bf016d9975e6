//! HTTP API tests for the notification service.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::DatabaseConfig;
use notification_service_lib::create_app;
use notification_service_lib::infra::Database;

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
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn notify(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/notify")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list() -> Request<Body> {
    Request::get("/notifications").body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_notify_returns_record() {
    let app = test_app().await;

    let (status, body) = send(&app, notify(json!({"user_id": 1, "message": " Hello "}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["order_id"], Value::Null);
    assert_eq!(body["message"], "Hello");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_notify_requires_message() {
    let app = test_app().await;

    let (status, _) = send(&app, notify(json!({"user_id": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, notify(json!({"user_id": 1, "message": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Field 'message' is required.");

    let (_, body) = send(&app, list()).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_returns_every_delivery_in_order() {
    let app = test_app().await;

    for i in 1..=3 {
        let (status, _) = send(
            &app,
            notify(json!({"user_id": i, "order_id": i * 10, "message": format!("message {}", i)})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, list()).await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    let messages: Vec<&str> = records
        .iter()
        .map(|r| r["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["message 1", "message 2", "message 3"]);
    assert_eq!(records[2]["order_id"], 30);
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Request::get("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "notification-service");
}
