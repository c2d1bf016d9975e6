//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::OrderService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<dyn OrderService>,
}

impl AppState {
    pub fn new(order_service: Arc<dyn OrderService>) -> Self {
        Self { order_service }
    }
}
