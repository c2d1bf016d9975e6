//! Notification service client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use common::HttpClientConfig;
use domain::{NewOrder, NOTIFICATION_SERVICE};

use super::UpstreamError;

#[cfg(test)]
use mockall::automock;

/// Body of `POST /notify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i32>,
    pub message: String,
}

impl NotificationRequest {
    /// Announce an order that is about to be recorded.
    pub fn for_order(order: &NewOrder) -> Self {
        Self {
            user_id: order.user_id,
            order_id: None,
            message: order.notification_message(),
        }
    }
}

/// Delivery of notifications through another service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), UpstreamError>;
}

/// Reqwest-backed client for `POST /notify`.
pub struct NotificationClient {
    client: Client,
    base_url: String,
}

impl NotificationClient {
    /// Build a client with the configured per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &HttpClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl Notifier for NotificationClient {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), UpstreamError> {
        let url = format!("{}/notify", self.base_url);
        debug!(%url, user_id = request.user_id, "Sending notification");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(NOTIFICATION_SERVICE, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(UpstreamError::status(NOTIFICATION_SERVICE, status, &body))
    }
}
