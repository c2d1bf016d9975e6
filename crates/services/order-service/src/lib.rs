//! Order Service Library
//!
//! Records orders for users owned by the user service and announces each new
//! order through the notification service. Notification is best-effort: the
//! outcome is stored on the order as `notification_sent`.

pub mod clients;
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

use crate::clients::{NotificationClient, Notifier, UserClient, UserDirectory};
use crate::config::OrderServiceConfig;
use crate::infra::Database;
use crate::repository::OrderStore;
use crate::routes::create_router;
use crate::service::OrderManager;
use crate::state::AppState;

/// Wire the app with HTTP clients built from `config`.
pub fn create_app(
    db: DatabaseConnection,
    config: &OrderServiceConfig,
) -> Result<Router, reqwest::Error> {
    let users = Arc::new(UserClient::new(&config.user_service)?);
    let notifier = Arc::new(NotificationClient::new(&config.notification_service)?);
    Ok(create_app_with(db, users, notifier))
}

/// Wire the app with caller-provided upstream clients.
pub fn create_app_with(
    db: DatabaseConnection,
    users: Arc<dyn UserDirectory>,
    notifier: Arc<dyn Notifier>,
) -> Router {
    let order_repo = Arc::new(OrderStore::new(db));
    let order_service = Arc::new(OrderManager::new(order_repo, users, notifier));

    create_router(AppState::new(order_service)).layer(TraceLayer::new_for_http())
}

/// Run the order service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = OrderServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &OrderServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.apply(action).await?;
    Ok(())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    config: OrderServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let db = Database::connect(&config.database).await?;

    let app = create_app(db.get_connection(), &config)?;

    let addr = config.service.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        user_service = %config.user_service.base_url,
        notification_service = %config.notification_service.base_url,
        "Order service listening on {}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
