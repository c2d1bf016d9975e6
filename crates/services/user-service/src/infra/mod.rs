//! Infrastructure layer - database and migrations.

pub mod migrations;

pub use migrations::Migrator;

/// SQLite database owned by the user service.
pub type Database = common::database::Database<Migrator>;
