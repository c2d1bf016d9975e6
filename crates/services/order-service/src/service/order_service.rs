//! Order service - validates the user, notifies, then records the order.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;

use common::{best_effort, AppError, AppResult, OptionExt};
use domain::{NewOrder, Order};

use crate::clients::{NotificationRequest, Notifier, UserDirectory};
use crate::repository::OrderRepository;

/// A freshly created order plus the reason its notification failed, if it did.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlacedOrder {
    #[serde(flatten)]
    pub order: Order,
    /// Present only when `notification_sent` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_error: Option<String>,
}

/// Order service trait for dependency injection.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Get order by ID
    async fn get_order(&self, id: i32) -> AppResult<Order>;

    /// List all orders in creation order
    async fn list_orders(&self) -> AppResult<Vec<Order>>;

    /// Create an order for an existing user.
    ///
    /// The notification is attempted exactly once before the order is
    /// written; its failure never fails the order.
    async fn place_order(&self, order: NewOrder) -> AppResult<PlacedOrder>;
}

/// Concrete implementation of OrderService.
pub struct OrderManager {
    repo: Arc<dyn OrderRepository>,
    users: Arc<dyn UserDirectory>,
    notifier: Arc<dyn Notifier>,
}

impl OrderManager {
    pub fn new(
        repo: Arc<dyn OrderRepository>,
        users: Arc<dyn UserDirectory>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repo,
            users,
            notifier,
        }
    }

    /// Confirm the user exists. Any failure to confirm rejects the order.
    async fn ensure_user_exists(&self, user_id: i32) -> AppResult<()> {
        match self.users.find_user(user_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(AppError::validation("User does not exist.")),
            Err(e) => {
                warn!(user_id, error = %e, "User validation failed");
                Err(AppError::validation(format!("User validation failed: {}", e)))
            }
        }
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn get_order(&self, id: i32) -> AppResult<Order> {
        self.repo.find_by_id(id).await?.ok_or_not_found("Order")
    }

    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        self.repo.list().await
    }

    async fn place_order(&self, order: NewOrder) -> AppResult<PlacedOrder> {
        self.ensure_user_exists(order.user_id).await?;

        let request = NotificationRequest::for_order(&order);
        let attempt = best_effort("notify", self.notifier.notify(&request)).await;

        let order = self.repo.create(order, attempt.succeeded).await?;
        info!(
            order_id = order.id,
            user_id = order.user_id,
            notification_sent = order.notification_sent,
            "Order created"
        );

        Ok(PlacedOrder {
            order,
            notification_error: attempt.error,
        })
    }
}
