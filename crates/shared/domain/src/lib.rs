//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared across the user, order and notification services.

pub mod constants;
pub mod error;
pub mod notification;
pub mod order;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use notification::{NewNotification, Notification};
pub use order::{NewOrder, Order};
pub use user::{NewUser, User};
