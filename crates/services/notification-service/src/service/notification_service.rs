//! Notification service - records and lists delivered notifications.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::AppResult;
use domain::{NewNotification, Notification};

use crate::repository::NotificationRepository;

/// Notification service trait for dependency injection.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Deliver a notification (persist and log it)
    async fn deliver(&self, notification: NewNotification) -> AppResult<Notification>;

    /// List all delivered notifications, oldest first
    async fn list_notifications(&self) -> AppResult<Vec<Notification>>;
}

/// Concrete implementation of NotificationService using repository.
pub struct NotificationManager {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationManager {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl NotificationService for NotificationManager {
    async fn deliver(&self, notification: NewNotification) -> AppResult<Notification> {
        let delivered = self.repo.create(notification).await?;

        info!(
            notification_id = delivered.id,
            user_id = ?delivered.user_id,
            order_id = ?delivered.order_id,
            created_at = %delivered.created_at,
            message = %delivered.message,
            "Notification delivered"
        );

        Ok(delivered)
    }

    async fn list_notifications(&self) -> AppResult<Vec<Notification>> {
        self.repo.list().await
    }
}
