//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new user; the email must not be registered yet
    async fn create_user(&self, user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found("User")
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        // Check if email already exists
        if self.repo.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::conflict("User with this email"));
        }

        let user = self.repo.create(user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }
}
