//! Common utilities shared across crates.
//!
//! This crate provides:
//! - Unified error handling with gRPC status conversion
//! - Shared configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
