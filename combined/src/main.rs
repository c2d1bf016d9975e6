//! Combined binary for development - runs all three services in one process.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tokio::task::JoinError;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{DatabaseConfig, ServiceConfig};
use domain::{
    DEFAULT_NOTIFICATION_SERVICE_PORT, DEFAULT_ORDER_SERVICE_PORT, DEFAULT_USER_SERVICE_PORT,
    NOTIFICATION_SERVICE, ORDER_SERVICE, USER_SERVICE,
};
use notification_service_lib::config::NotificationServiceConfig;
use order_service_lib::config::OrderServiceConfig;
use user_service_lib::config::UserServiceConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "orders-demo")]
#[command(about = "Combined user, notification and order services for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = DEFAULT_USER_SERVICE_PORT)]
        user_port: u16,
        #[arg(long, default_value_t = DEFAULT_NOTIFICATION_SERVICE_PORT)]
        notification_port: u16,
        #[arg(long, default_value_t = DEFAULT_ORDER_SERVICE_PORT)]
        order_port: u16,
        /// Directory holding one SQLite file per service
        #[arg(long, env = "DATA_DIR", default_value = "data")]
        data_dir: PathBuf,
    },
    /// Run database migrations for all services
    Migrate {
        #[arg(long, env = "DATA_DIR", default_value = "data")]
        data_dir: PathBuf,
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

impl From<MigrateAction> for common::database::MigrateAction {
    fn from(action: MigrateAction) -> Self {
        match action {
            MigrateAction::Up => Self::Up,
            MigrateAction::Down => Self::Down,
            MigrateAction::Status => Self::Status,
            MigrateAction::Fresh => Self::Fresh,
        }
    }
}

/// Per-service configurations sharing one host and data directory.
struct Configs {
    user: UserServiceConfig,
    notification: NotificationServiceConfig,
    order: OrderServiceConfig,
}

impl Configs {
    fn new(host: &str, ports: (u16, u16, u16), data_dir: &Path) -> Self {
        let (user_port, notification_port, order_port) = ports;

        let mut order = OrderServiceConfig::from_env()
            .with_local_upstreams(host, user_port, notification_port);
        order.service = service(ORDER_SERVICE, host, order_port);
        order.database = database(data_dir, ORDER_SERVICE);

        Self {
            user: UserServiceConfig {
                service: service(USER_SERVICE, host, user_port),
                database: database(data_dir, USER_SERVICE),
            },
            notification: NotificationServiceConfig {
                service: service(NOTIFICATION_SERVICE, host, notification_port),
                database: database(data_dir, NOTIFICATION_SERVICE),
            },
            order,
        }
    }
}

fn service(name: &str, host: &str, port: u16) -> ServiceConfig {
    ServiceConfig {
        service_name: name.to_string(),
        host: host.to_string(),
        port,
    }
}

fn database(data_dir: &Path, name: &str) -> DatabaseConfig {
    let path = data_dir.join(format!("{}.db", name));
    DatabaseConfig {
        url: DatabaseConfig::sqlite_file_url(&path.to_string_lossy()),
        ..DatabaseConfig::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            user_port,
            notification_port,
            order_port,
            data_dir,
        } => {
            let configs = Configs::new(&host, (user_port, notification_port, order_port), &data_dir);

            info!("Starting combined services in development mode");
            info!("  User service:         http://{}:{}", host, user_port);
            info!("  Notification service: http://{}:{}", host, notification_port);
            info!("  Order service:        http://{}:{}", host, order_port);
            info!("  Data directory:       {}", data_dir.display());

            let user_handle = tokio::spawn(user_service_lib::run_server_with_config(configs.user));
            let notification_handle = tokio::spawn(
                notification_service_lib::run_server_with_config(configs.notification),
            );
            // Upstreams are looked up per request, so start order is irrelevant
            let order_handle = tokio::spawn(order_service_lib::run_server_with_config(configs.order));

            // Servers run forever, so any exit is a failure of the whole process
            let failure = tokio::select! {
                result = user_handle => exit_error(USER_SERVICE, result),
                result = notification_handle => exit_error(NOTIFICATION_SERVICE, result),
                result = order_handle => exit_error(ORDER_SERVICE, result),
            };
            error!("{}", failure);
            return Err(failure);
        }
        Commands::Migrate { data_dir, action } => {
            let configs = Configs::new(
                "127.0.0.1",
                (
                    DEFAULT_USER_SERVICE_PORT,
                    DEFAULT_NOTIFICATION_SERVICE_PORT,
                    DEFAULT_ORDER_SERVICE_PORT,
                ),
                &data_dir,
            );
            let action = action.into();

            info!("Migrating {}", USER_SERVICE);
            user_service_lib::run_migrations(&configs.user, action).await?;
            info!("Migrating {}", NOTIFICATION_SERVICE);
            notification_service_lib::run_migrations(&configs.notification, action).await?;
            info!("Migrating {}", ORDER_SERVICE);
            order_service_lib::run_migrations(&configs.order, action).await?;
        }
    }

    Ok(())
}

/// Describe why a service task stopped.
fn exit_error(service: &str, result: Result<Result<(), BoxError>, JoinError>) -> BoxError {
    match result {
        Ok(Ok(())) => format!("{} exited unexpectedly", service).into(),
        Ok(Err(e)) => format!("{} failed: {}", service, e).into(),
        Err(e) => format!("{} task panicked: {}", service, e).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_exit_is_still_an_error() {
        let err = exit_error(USER_SERVICE, Ok(Ok(())));
        assert_eq!(err.to_string(), "user-service exited unexpectedly");
    }

    #[test]
    fn service_error_is_carried() {
        let err = exit_error(ORDER_SERVICE, Ok(Err("address in use".into())));
        assert_eq!(err.to_string(), "order-service failed: address in use");
    }

    #[tokio::test]
    async fn panicked_task_is_reported() {
        let handle = tokio::spawn(async { panic!("boom") });
        let err = exit_error(NOTIFICATION_SERVICE, handle.await);
        assert!(err.to_string().starts_with("notification-service task panicked"));
    }
}
