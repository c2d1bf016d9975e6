//! Notification domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_MESSAGE_LENGTH;
use crate::error::{DomainError, DomainResult};

/// A delivered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Notification {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Target user, if the sender named one
    pub user_id: Option<i32>,
    /// Related order, if the sender had one
    pub order_id: Option<i32>,
    #[cfg_attr(feature = "openapi", schema(example = "New order for user #1: 1 x Pen."))]
    pub message: String,
    /// Delivery timestamp
    pub created_at: DateTime<Utc>,
}

/// Validated input for delivering a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id: Option<i32>,
    pub order_id: Option<i32>,
    pub message: String,
}

impl NewNotification {
    pub fn new(user_id: Option<i32>, order_id: Option<i32>, message: &str) -> DomainResult<Self> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DomainError::validation("Field 'message' is required."));
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(DomainError::validation(format!(
                "Field 'message' must be at most {} characters.",
                MAX_MESSAGE_LENGTH
            )));
        }

        Ok(Self {
            user_id,
            order_id,
            message: message.to_string(),
        })
    }
}
