//! Shared configuration structures.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and health output
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Build a service configuration, reading `HOST` and `PORT` from the
    /// environment with the given fallback port.
    pub fn from_env(service_name: &str, default_port: u16) -> Self {
        Self {
            service_name: service_name.to_string(),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
        }
    }

    /// Get the full bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Load the database configuration for one service.
    ///
    /// Resolution order: `<PREFIX>_DATABASE_URL`, `DATABASE_URL`, then a file
    /// URL built from `DB_PATH` (defaulting to `default_path`).
    pub fn from_env(prefix: &str, default_path: &str) -> Self {
        let url = env::var(format!("{}_DATABASE_URL", prefix))
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| {
                let path = env::var("DB_PATH").unwrap_or_else(|_| default_path.to_string());
                Self::sqlite_file_url(&path)
            });

        Self {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            min_connections: 1,
        }
    }

    /// Configuration for a private in-memory database (tests, demos).
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }

    /// Build a read-write-create SQLite URL for a file path.
    pub fn sqlite_file_url(path: &str) -> String {
        format!("sqlite://{}?mode=rwc", path)
    }

    /// Whether this configuration points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Filesystem path of a file-backed database, if any.
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or(rest);
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::sqlite_file_url("data/app.db"),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

/// Outbound HTTP client configuration for calling another service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpClientConfig {
    /// Base URL of the target service (e.g., "http://user-service:5000")
    pub base_url: String,
    /// Total request timeout in milliseconds
    pub timeout_ms: u64,
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_ms: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_is_extracted_from_sqlite_url() {
        let config = DatabaseConfig {
            url: DatabaseConfig::sqlite_file_url("/data/user-service.db"),
            ..DatabaseConfig::default()
        };
        assert_eq!(config.file_path(), Some(PathBuf::from("/data/user-service.db")));
    }

    #[test]
    fn in_memory_has_no_file_path() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.file_path(), None);
    }

    #[test]
    fn http_client_base_url_drops_trailing_slash() {
        let config = HttpClientConfig::new("http://user-service:5000/", Duration::from_secs(2));
        assert_eq!(config.base_url, "http://user-service:5000");
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }
}
