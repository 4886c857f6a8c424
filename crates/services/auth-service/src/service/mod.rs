//! Authentication business logic.
//!
//! Four components composed behind the [`AuthService`] façade:
//! credential verification, session issuance, session validation, and
//! account registration.

mod account_registrar;
mod auth_service;
mod credential_verifier;
mod session_issuer;
mod session_validator;

pub use account_registrar::AccountRegistrar;
pub use auth_service::{AuthService, Authenticator, LoginOutcome};
pub use credential_verifier::CredentialVerifier;
pub use session_issuer::SessionIssuer;
pub use session_validator::{SessionValidator, ValidationOutcome};
