//! User service client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use common::HttpClientConfig;
use domain::{User, USER_SERVICE};

use super::UpstreamError;

#[cfg(test)]
use mockall::automock;

/// Lookup of users owned by another service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user; `Ok(None)` means the user service answered "not found".
    async fn find_user(&self, id: i32) -> Result<Option<User>, UpstreamError>;
}

/// Reqwest-backed client for `GET /users/{id}`.
pub struct UserClient {
    client: Client,
    base_url: String,
}

impl UserClient {
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
impl UserDirectory for UserClient {
    async fn find_user(&self, id: i32) -> Result<Option<User>, UpstreamError> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(%url, "Looking up user");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(USER_SERVICE, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::transport(USER_SERVICE, e))?;

        match status {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => serde_json::from_slice::<User>(&body)
                .map(Some)
                .map_err(|e| UpstreamError::decode(USER_SERVICE, e)),
            s => Err(UpstreamError::status(USER_SERVICE, s, &body)),
        }
    }
}
