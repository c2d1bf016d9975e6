//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::NotificationService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub notification_service: Arc<dyn NotificationService>,
}

impl AppState {
    pub fn new(notification_service: Arc<dyn NotificationService>) -> Self {
        Self {
            notification_service,
        }
    }
}
