//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definition for
//! Auth: credential verification, session issuance and validation.

/// Authentication service definitions.
pub mod auth {
    tonic::include_proto!("auth");
}

// Re-export commonly used items
pub use auth::auth_client::AuthClient;
pub use auth::auth_server::{Auth, AuthServer};
