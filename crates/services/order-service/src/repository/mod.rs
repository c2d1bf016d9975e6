//! Repository layer for data access.

pub mod entities;
mod order_repository;

#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderStore};
