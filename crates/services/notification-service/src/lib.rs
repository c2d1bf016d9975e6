//! Notification Service Library
//!
//! Leaf service that records delivered notifications and lists them in
//! delivery order. Runs standalone or embedded in the combined binary.

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

use crate::config::NotificationServiceConfig;
use crate::infra::Database;
use crate::repository::NotificationStore;
use crate::routes::create_router;
use crate::service::NotificationManager;
use crate::state::AppState;

/// Wire repository, service and routes over an open database connection.
pub fn create_app(db: DatabaseConnection) -> Router {
    let repo = Arc::new(NotificationStore::new(db));
    let notification_service = Arc::new(NotificationManager::new(repo));

    create_router(AppState::new(notification_service)).layer(TraceLayer::new_for_http())
}

/// Run the notification service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = NotificationServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &NotificationServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.apply(action).await?;
    Ok(())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    config: NotificationServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let db = Database::connect(&config.database).await?;

    let app = create_app(db.get_connection());

    let addr = config.service.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Notification service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
