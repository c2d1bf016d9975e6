//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::CreateUserRequest;
use domain::User;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
    ),
    components(schemas(User, CreateUserRequest)),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
