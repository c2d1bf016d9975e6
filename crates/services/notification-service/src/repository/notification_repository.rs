//! Notification repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use super::entities::notification::{self, ActiveModel, Entity as NotificationEntity};
use common::{AppError, AppResult};
use domain::{NewNotification, Notification};

#[cfg(test)]
use mockall::automock;

/// Notification repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a delivered notification
    async fn create(&self, notification: NewNotification) -> AppResult<Notification>;

    /// List all notifications in delivery order
    async fn list(&self) -> AppResult<Vec<Notification>>;
}

/// Concrete implementation of NotificationRepository backed by SQLite
pub struct NotificationStore {
    db: DatabaseConnection,
}

impl NotificationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for NotificationStore {
    async fn create(&self, notification: NewNotification) -> AppResult<Notification> {
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(notification.user_id),
            order_id: Set(notification.order_id),
            message: Set(notification.message),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Notification::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Notification>> {
        let models = NotificationEntity::find()
            .order_by_asc(notification::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Notification::from).collect())
    }
}
