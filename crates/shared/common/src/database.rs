//! SQLite connection and migration management.
//!
//! Each service owns its own database file and its own `Migrator`; this
//! wrapper is generic over the migrator so the services share one
//! implementation.

use std::collections::HashSet;
use std::marker::PhantomData;

use sea_orm::{
    ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait, SchemaManager};
use tracing::info;

use crate::config::DatabaseConfig;

/// Table in which sea-orm-migration records applied versions.
const MIGRATION_TABLE: &str = "seaql_migrations";

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Database wrapper for connection management
pub struct Database<M> {
    connection: DatabaseConnection,
    _migrator: PhantomData<M>,
}

impl<M> Clone for Database<M> {
    fn clone(&self) -> Self {
        Self {
            connection: self.connection.clone(),
            _migrator: PhantomData,
        }
    }
}

impl<M: MigratorTrait> Database<M> {
    /// Initialize database connection and run migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        // Run pending migrations
        M::up(&db.connection, None).await?;
        info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        if let Some(parent) = config.file_path().as_deref().and_then(|p| p.parent()) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DbErr::Custom(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        // Every connection to `sqlite::memory:` opens a separate database
        let max_connections = if config.is_in_memory() {
            1
        } else {
            config.max_connections
        };

        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(max_connections)
            .min_connections(config.min_connections.min(max_connections))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self {
            connection,
            _migrator: PhantomData,
        })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        M::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        M::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        // Before the first `up` the tracking table does not exist yet
        let tracked = SchemaManager::new(&self.connection)
            .has_table(MIGRATION_TABLE)
            .await?;
        let applied: HashSet<String> = if tracked {
            seaql_migrations::Entity::find()
                .order_by_asc(seaql_migrations::Column::Version)
                .all(&self.connection)
                .await?
                .into_iter()
                .map(|m| m.version)
                .collect()
        } else {
            HashSet::new()
        };

        let migrations = M::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        M::fresh(&self.connection).await
    }

    /// Apply a migration CLI action against this database.
    pub async fn apply(&self, action: MigrateAction) -> Result<(), DbErr> {
        match action {
            MigrateAction::Up => {
                self.run_migrations().await?;
                info!("Migrations applied successfully");
            }
            MigrateAction::Down => {
                self.rollback_migration().await?;
                info!("Rolled back last migration");
            }
            MigrateAction::Status => {
                for (name, applied) in self.migration_status().await? {
                    let marker = if applied { "[x]" } else { "[ ]" };
                    println!("{} {}", marker, name);
                }
            }
            MigrateAction::Fresh => {
                self.fresh_migrations().await?;
                info!("Database reset and migrations applied");
            }
        }
        Ok(())
    }
}
