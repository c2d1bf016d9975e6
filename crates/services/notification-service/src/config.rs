//! Notification service configuration.

use common::{DatabaseConfig, ServiceConfig};
use domain::{DEFAULT_NOTIFICATION_SERVICE_PORT, NOTIFICATION_SERVICE};

/// Default on-disk location of the notification store.
pub const DEFAULT_DB_PATH: &str = "/data/notification-service.db";

/// Notification service configuration.
#[derive(Debug, Clone)]
pub struct NotificationServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl NotificationServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(
                NOTIFICATION_SERVICE,
                DEFAULT_NOTIFICATION_SERVICE_PORT,
            ),
            database: DatabaseConfig::from_env("NOTIFICATION_SERVICE", DEFAULT_DB_PATH),
        }
    }
}
