//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Service Names
// =============================================================================

/// Name the user service uses in logs, health output and upstream errors
pub const USER_SERVICE: &str = "user-service";

/// Name of the order service
pub const ORDER_SERVICE: &str = "order-service";

/// Name of the notification service
pub const NOTIFICATION_SERVICE: &str = "notification-service";

// =============================================================================
// Validation
// =============================================================================

/// Minimum display name length (after trimming)
pub const MIN_NAME_LENGTH: usize = 1;

/// Maximum display name length
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum email length
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum order item description length
pub const MAX_ITEM_LENGTH: usize = 255;

/// Maximum notification message length
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Smallest accepted order amount
pub const MIN_ORDER_AMOUNT: i32 = 1;

// =============================================================================
// Default Ports
// =============================================================================

/// Default user service HTTP port
pub const DEFAULT_USER_SERVICE_PORT: u16 = 5000;

/// Default notification service HTTP port
pub const DEFAULT_NOTIFICATION_SERVICE_PORT: u16 = 5001;

/// Default order service HTTP port
pub const DEFAULT_ORDER_SERVICE_PORT: u16 = 5002;
