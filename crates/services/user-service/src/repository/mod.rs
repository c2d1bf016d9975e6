//! Repository layer for data access.

pub mod entities;
mod user_repository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserStore};
