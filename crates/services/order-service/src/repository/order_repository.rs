//! Order repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use super::entities::order::{self, ActiveModel, Entity as OrderEntity};
use common::{AppError, AppResult};
use domain::{NewOrder, Order};

#[cfg(test)]
use mockall::automock;

/// Order repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find order by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>>;

    /// Persist an order together with the outcome of its notification
    async fn create(&self, order: NewOrder, notification_sent: bool) -> AppResult<Order>;

    /// List all orders in creation order
    async fn list(&self) -> AppResult<Vec<Order>>;
}

/// Concrete implementation of OrderRepository backed by SQLite
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        let result = OrderEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Order::from))
    }

    async fn create(&self, order: NewOrder, notification_sent: bool) -> AppResult<Order> {
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(order.user_id),
            item: Set(order.item),
            amount: Set(order.amount),
            notification_sent: Set(notification_sent),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Order::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Order::from).collect())
    }
}
