//! HTTP API tests for the order service with in-process upstream stubs.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::DatabaseConfig;
use domain::User;
use order_service_lib::clients::{NotificationRequest, Notifier, UpstreamError, UserDirectory};
use order_service_lib::create_app_with;
use order_service_lib::infra::Database;

/// Users 1 and 2 exist; everything else is unknown.
struct KnownUsers;

#[async_trait]
impl UserDirectory for KnownUsers {
    async fn find_user(&self, id: i32) -> Result<Option<User>, UpstreamError> {
        if id == 1 || id == 2 {
            Ok(Some(User {
                id,
                name: format!("User {}", id),
                email: format!("user{}@example.com", id),
                created_at: Utc::now(),
            }))
        } else {
            Ok(None)
        }
    }
}

struct UnreachableUsers;

#[async_trait]
impl UserDirectory for UnreachableUsers {
    async fn find_user(&self, _id: i32) -> Result<Option<User>, UpstreamError> {
        Err(UpstreamError::Timeout {
            service: "user-service",
            details: "operation timed out".to_string(),
        })
    }
}

/// Records every request; fails all of them when `fail` is set.
#[derive(Default)]
struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<NotificationRequest>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), UpstreamError> {
        self.sent.lock().unwrap().push(request.clone());
        if self.fail {
            Err(UpstreamError::Unavailable {
                service: "notification-service",
                details: "connection refused".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

async fn test_app(users: Arc<dyn UserDirectory>, notifier: Arc<RecordingNotifier>) -> Router {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database should open");
    create_app_with(db.get_connection(), users, notifier)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn create_order(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/orders")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_order_success() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = test_app(Arc::new(KnownUsers), notifier.clone()).await;

    let (status, body) = send(
        &app,
        create_order(json!({"user_id": 1, "item": "Pen", "amount": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["item"], "Pen");
    assert_eq!(body["amount"], 2);
    assert_eq!(body["notification_sent"], true);
    assert!(body.get("notification_error").is_none());

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id, 1);
    assert_eq!(sent[0].message, "New order for user #1: 2 x Pen.");
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_any_call() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = test_app(Arc::new(KnownUsers), notifier.clone()).await;

    let cases = [
        (json!({"user_id": 1, "item": "Pen", "amount": 0}), Some("Field 'amount' must be > 0.")),
        (json!({"user_id": 1, "item": "Pen", "amount": -5}), Some("Field 'amount' must be > 0.")),
        (json!({"user_id": 1, "item": "   ", "amount": 1}), Some("Field 'item' is required.")),
        (json!({"user_id": 1, "item": "", "amount": 1}), Some("Field 'item' is required.")),
        (json!({"item": "Pen", "amount": 1}), None),
        (json!({"user_id": 1, "amount": 1}), None),
        (json!({"user_id": 1, "item": "Pen", "amount": "many"}), None),
    ];

    for (payload, message) in cases {
        let (status, body) = send(&app, create_order(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        if let Some(message) = message {
            assert_eq!(body["error"]["message"], message);
        }
    }

    assert!(notifier.sent.lock().unwrap().is_empty());
    let (_, body) = send(&app, get("/orders")).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_user_creates_nothing() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = test_app(Arc::new(KnownUsers), notifier.clone()).await;

    let (status, body) = send(
        &app,
        create_order(json!({"user_id": 99, "item": "Pen", "amount": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "User does not exist.");
    assert!(notifier.sent.lock().unwrap().is_empty());

    let (_, body) = send(&app, get("/orders")).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_user_lookup_failure_is_bad_request() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = test_app(Arc::new(UnreachableUsers), notifier.clone()).await;

    let (status, body) = send(
        &app,
        create_order(json!({"user_id": 1, "item": "Pen", "amount": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("User validation failed"), "{}", message);
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_notification_failure_does_not_fail_order() {
    let notifier = Arc::new(RecordingNotifier {
        fail: true,
        ..Default::default()
    });
    let app = test_app(Arc::new(KnownUsers), notifier.clone()).await;

    let (status, body) = send(
        &app,
        create_order(json!({"user_id": 2, "item": "Book", "amount": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["notification_sent"], false);
    assert!(body["notification_error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
    assert_eq!(notifier.sent.lock().unwrap().len(), 1);

    // The stored record keeps the outcome of the single attempt
    let (status, body) = send(&app, get("/orders/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification_sent"], false);
    assert!(body.get("notification_error").is_none());
}

#[tokio::test]
async fn test_list_and_get_orders() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = test_app(Arc::new(KnownUsers), notifier).await;

    for (user_id, item) in [(1, "Pen"), (2, "Book"), (1, "Lamp")] {
        let (status, _) = send(
            &app,
            create_order(json!({"user_id": user_id, "item": item, "amount": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/orders")).await;
    assert_eq!(status, StatusCode::OK);
    let items: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["item"].as_str().unwrap())
        .collect();
    assert_eq!(items, vec!["Pen", "Book", "Lamp"]);

    let (status, body) = send(&app, get("/orders/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 2);

    let (status, body) = send(&app, get("/orders/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Order not found");
}

#[tokio::test]
async fn test_health() {
    let app = test_app(Arc::new(UnreachableUsers), Arc::new(RecordingNotifier::default())).await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "order-service");
}
