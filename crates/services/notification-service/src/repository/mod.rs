//! Repository layer for data access.

pub mod entities;
mod notification_repository;

#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
pub use notification_repository::{NotificationRepository, NotificationStore};
