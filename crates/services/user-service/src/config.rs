//! User service configuration.

use common::{DatabaseConfig, ServiceConfig};
use domain::{DEFAULT_USER_SERVICE_PORT, USER_SERVICE};

/// Default on-disk location of the user store.
pub const DEFAULT_DB_PATH: &str = "/data/user-service.db";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Bind address and service name
    pub service: ServiceConfig,
    /// SQLite store owned by this service
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(USER_SERVICE, DEFAULT_USER_SERVICE_PORT),
            database: DatabaseConfig::from_env("USER_SERVICE", DEFAULT_DB_PATH),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: USER_SERVICE.to_string(),
                host: "0.0.0.0".to_string(),
                port: DEFAULT_USER_SERVICE_PORT,
            },
            database: DatabaseConfig {
                url: DatabaseConfig::sqlite_file_url(DEFAULT_DB_PATH),
                ..DatabaseConfig::default()
            },
        }
    }
}
