//! SeaORM database entities.

pub mod account;
pub mod session;
