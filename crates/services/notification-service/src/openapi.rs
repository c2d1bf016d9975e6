//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::notification_handler::NotifyRequest;
use domain::Notification;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::notification_handler::notify,
        crate::handlers::notification_handler::list_notifications,
    ),
    components(schemas(Notification, NotifyRequest)),
    tags(
        (name = "Notifications", description = "Notification delivery endpoints"),
    )
)]
pub struct ApiDoc;
