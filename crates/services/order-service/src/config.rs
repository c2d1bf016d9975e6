//! Order service configuration.

use std::env;
use std::time::Duration;

use common::{DatabaseConfig, HttpClientConfig, ServiceConfig};
use domain::{DEFAULT_ORDER_SERVICE_PORT, ORDER_SERVICE};

/// Default on-disk location of the order store.
pub const DEFAULT_DB_PATH: &str = "/data/order-service.db";

/// Default user service base URL (container network name).
pub const DEFAULT_USER_SERVICE_URL: &str = "http://user-service:5000";

/// Default notification service base URL (container network name).
pub const DEFAULT_NOTIFICATION_SERVICE_URL: &str = "http://notification-service:5001";

/// Default timeout for each outbound call.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: f64 = 2.0;

/// Order service configuration.
///
/// Upstream addresses are fixed at process start.
#[derive(Debug, Clone)]
pub struct OrderServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    /// User service endpoint, used to validate `user_id`
    pub user_service: HttpClientConfig,
    /// Notification service endpoint, called best-effort
    pub notification_service: HttpClientConfig,
}

impl OrderServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let timeout = http_timeout_from_env();
        Self {
            service: ServiceConfig::from_env(ORDER_SERVICE, DEFAULT_ORDER_SERVICE_PORT),
            database: DatabaseConfig::from_env("ORDER_SERVICE", DEFAULT_DB_PATH),
            user_service: HttpClientConfig::new(
                env::var("USER_SERVICE_URL").unwrap_or_else(|_| DEFAULT_USER_SERVICE_URL.to_string()),
                timeout,
            ),
            notification_service: HttpClientConfig::new(
                env::var("NOTIFICATION_SERVICE_URL")
                    .unwrap_or_else(|_| DEFAULT_NOTIFICATION_SERVICE_URL.to_string()),
                timeout,
            ),
        }
    }

    /// Point both upstreams at services running on `host`.
    pub fn with_local_upstreams(mut self, host: &str, user_port: u16, notification_port: u16) -> Self {
        // A wildcard bind address is not a valid destination
        let host = if host == "0.0.0.0" { "127.0.0.1" } else { host };
        self.user_service.base_url = format!("http://{}:{}", host, user_port);
        self.notification_service.base_url = format!("http://{}:{}", host, notification_port);
        self
    }
}

fn http_timeout_from_env() -> Duration {
    parse_timeout(env::var("HTTP_TIMEOUT_SECONDS").ok().as_deref())
}

/// Seconds as a positive, representable duration; anything else falls back to the default.
fn parse_timeout(raw: Option<&str>) -> Duration {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|secs| *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or_else(|| Duration::from_secs_f64(DEFAULT_HTTP_TIMEOUT_SECONDS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_upstreams_replace_wildcard_host() {
        let config = OrderServiceConfig::from_env().with_local_upstreams("0.0.0.0", 6000, 6001);
        assert_eq!(config.user_service.base_url, "http://127.0.0.1:6000");
        assert_eq!(config.notification_service.base_url, "http://127.0.0.1:6001");
    }

    #[test]
    fn timeout_accepts_fractional_seconds() {
        assert_eq!(parse_timeout(Some("0.25")), Duration::from_millis(250));
        assert_eq!(parse_timeout(Some(" 5 ")), Duration::from_secs(5));
    }

    #[test]
    fn unusable_timeouts_fall_back_to_default() {
        let default = Duration::from_secs(2);
        let inputs = [
            None,
            Some(""),
            Some("soon"),
            Some("0"),
            Some("-1"),
            Some("NaN"),
            Some("inf"),
            Some("1e20"),
        ];
        for raw in inputs {
            assert_eq!(parse_timeout(raw), default, "input: {:?}", raw);
        }
    }
}
