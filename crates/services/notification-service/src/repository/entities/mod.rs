//! SeaORM entity definitions

pub mod notification;
