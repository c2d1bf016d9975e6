//! SeaORM entity definitions

pub mod order;
