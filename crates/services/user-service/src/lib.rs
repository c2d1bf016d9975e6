//! User Service Library
//!
//! This crate owns user records and exposes them over HTTP/JSON.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod config;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use common::database::MigrateAction;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::routes::create_router;
use crate::service::UserManager;
use crate::state::AppState;

/// Wire repository, service and routes over an open database connection.
pub fn create_app(db: DatabaseConnection) -> Router {
    let user_repo = Arc::new(UserStore::new(db));
    let user_service = Arc::new(UserManager::new(user_repo));

    create_router(AppState::new(user_service)).layer(TraceLayer::new_for_http())
}

/// Run the user service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = UserServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &UserServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.apply(action).await?;
    Ok(())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    let app = create_app(db.get_connection());

    let addr = config.service.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("User service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
