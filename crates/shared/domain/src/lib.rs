//! Domain layer - Core entities and value logic for authentication.
//!
//! This crate contains pure domain types with no infrastructure
//! dependencies: accounts, sessions, and the session freshness judgment.

pub mod account;
pub mod constants;
pub mod session;

pub use account::Account;
pub use constants::*;
pub use session::{Session, SessionStatus};
