//! Order handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::{AppResult, ValidatedJson};
use domain::{NewOrder, Order};

use crate::service::PlacedOrder;
use crate::state::AppState;

/// Order creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    /// Existing user in the user service
    #[schema(example = 1)]
    pub user_id: i32,
    #[validate(length(min = 1, message = "Field 'item' is required."))]
    #[schema(example = "Pen")]
    pub item: String,
    #[validate(range(min = 1, message = "Field 'amount' must be > 0."))]
    #[schema(example = 2, minimum = 1)]
    pub amount: i32,
}

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order))
}

/// Create an order
///
/// The user is checked against the user service first. The notification
/// service is then called once; if that fails the order is still created
/// with `notification_sent: false`.
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = PlacedOrder),
        (status = 400, description = "Invalid input, unknown user, or user validation failed")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<PlacedOrder>)> {
    let new_order = NewOrder::new(payload.user_id, &payload.item, payload.amount)?;
    let placed = state.order_service.place_order(new_order).await?;

    Ok((StatusCode::CREATED, Json(placed)))
}

/// List all orders
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders in creation order", body = Vec<Order>)
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders))
}

/// Get order by ID
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Orders",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order record", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Order>> {
    let order = state.order_service.get_order(id).await?;
    Ok(Json(order))
}
