//! Common utilities shared across all microservices.
//!
//! This crate provides:
//! - Unified error handling for HTTP
//! - Configuration structures
//! - SQLite connection and migration management (feature `database`)
//! - Request extractors and the shared health endpoint
//! - The best-effort call helper

pub mod best_effort;
pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod error;
pub mod extractors;
pub mod health;

pub use best_effort::{best_effort, Attempt};
pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use extractors::ValidatedJson;
pub use health::health_routes;
