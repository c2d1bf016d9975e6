//! Order domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ITEM_LENGTH, MIN_ORDER_AMOUNT};
use crate::error::{DomainError, DomainResult};

/// Order domain entity.
///
/// `notification_sent` records the outcome of the single delivery attempt made
/// when the order was created. It is never re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Order {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Referenced user, validated against the user service at creation only
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub user_id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "Pen"))]
    pub item: String,
    #[cfg_attr(feature = "openapi", schema(example = 1, minimum = 1))]
    pub amount: i32,
    pub notification_sent: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated, normalized input for creating an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: i32,
    pub item: String,
    pub amount: i32,
}

impl NewOrder {
    pub fn new(user_id: i32, item: &str, amount: i32) -> DomainResult<Self> {
        let item = item.trim();
        if item.is_empty() {
            return Err(DomainError::validation("Field 'item' is required."));
        }
        if item.chars().count() > MAX_ITEM_LENGTH {
            return Err(DomainError::validation(format!(
                "Field 'item' must be at most {} characters.",
                MAX_ITEM_LENGTH
            )));
        }
        if amount < MIN_ORDER_AMOUNT {
            return Err(DomainError::validation("Field 'amount' must be > 0."));
        }

        Ok(Self {
            user_id,
            item: item.to_string(),
            amount,
        })
    }

    /// Message sent to the notification service for this order.
    pub fn notification_message(&self) -> String {
        format!(
            "New order for user #{}: {} x {}.",
            self.user_id, self.amount, self.item
        )
    }
}
