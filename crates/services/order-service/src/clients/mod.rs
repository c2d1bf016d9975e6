//! Outbound HTTP clients for the services an order depends on.

mod error;
mod notification_client;
mod user_client;

pub use error::UpstreamError;
#[cfg(test)]
pub use notification_client::MockNotifier;
pub use notification_client::{NotificationClient, NotificationRequest, Notifier};
#[cfg(test)]
pub use user_client::MockUserDirectory;
pub use user_client::{UserClient, UserDirectory};
