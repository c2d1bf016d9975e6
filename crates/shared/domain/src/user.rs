//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::constants::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// Users are immutable once created and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Server-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Ada Lovelace"))]
    pub name: String,
    /// Email address (unique, stored lowercased)
    #[cfg_attr(feature = "openapi", schema(example = "ada@example.com"))]
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Validated, normalized input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Normalize and validate raw user input.
    ///
    /// Both fields are trimmed and the email is lowercased so uniqueness is
    /// case-insensitive.
    pub fn new(name: &str, email: &str) -> DomainResult<Self> {
        let name = name.trim();
        let email = email.trim().to_lowercase();

        if name.chars().count() < MIN_NAME_LENGTH || email.is_empty() {
            return Err(DomainError::validation(
                "Fields 'name' and 'email' are required.",
            ));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Field 'name' must be at most {} characters.",
                MAX_NAME_LENGTH
            )));
        }
        if email.len() > MAX_EMAIL_LENGTH || !email.validate_email() {
            return Err(DomainError::validation("Field 'email' is not a valid email address."));
        }

        Ok(Self {
            name: name.to_string(),
            email,
        })
    }
}
