//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::order_handler::CreateOrderRequest;
use crate::service::PlacedOrder;
use domain::Order;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::order_handler::create_order,
        crate::handlers::order_handler::list_orders,
        crate::handlers::order_handler::get_order,
    ),
    components(schemas(Order, PlacedOrder, CreateOrderRequest)),
    tags(
        (name = "Orders", description = "Order placement endpoints"),
    )
)]
pub struct ApiDoc;
