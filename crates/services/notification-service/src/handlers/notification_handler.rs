//! Notification handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::{AppResult, ValidatedJson};
use domain::{NewNotification, Notification};

use crate::state::AppState;

/// Notification delivery request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NotifyRequest {
    /// Target user
    #[schema(example = 1)]
    pub user_id: Option<i32>,
    /// Related order, if any
    pub order_id: Option<i32>,
    /// Message text
    #[validate(length(min = 1, message = "Field 'message' is required."))]
    #[schema(example = "New order for user #1: 1 x Pen.")]
    pub message: String,
}

/// Create notification routes
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notify", post(notify))
        .route("/notifications", get(list_notifications))
}

/// Deliver a notification
#[utoipa::path(
    post,
    path = "/notify",
    tag = "Notifications",
    request_body = NotifyRequest,
    responses(
        (status = 201, description = "Notification delivered", body = Notification),
        (status = 400, description = "Validation error")
    )
)]
pub async fn notify(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NotifyRequest>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    let notification = NewNotification::new(payload.user_id, payload.order_id, &payload.message)?;
    let delivered = state.notification_service.deliver(notification).await?;

    Ok((StatusCode::CREATED, Json(delivered)))
}

/// List delivered notifications, oldest first
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "Notifications",
    responses(
        (status = 200, description = "Notifications in delivery order", body = Vec<Notification>)
    )
)]
pub async fn list_notifications(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = state.notification_service.list_notifications().await?;
    Ok(Json(notifications))
}
