//! Service layer - notification delivery.

mod notification_service;

pub use notification_service::{NotificationManager, NotificationService};
