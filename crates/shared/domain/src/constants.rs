//! Domain-level constants.

// =============================================================================
// Response messages
// =============================================================================

/// Message returned on a successful login.
pub const MSG_LOGIN_SUCCESSFUL: &str = "Login successful";

/// Message returned on a successful sign-up.
pub const MSG_SIGNUP_SUCCESSFUL: &str = "Signup successful";

/// Message returned when a validated session is within its window.
pub const MSG_AUTHENTICATED: &str = "authenticated";

/// Message returned when a validated session has gone stale.
pub const MSG_NOT_AUTHORIZED: &str = "not authorized";

// =============================================================================
// Networking defaults
// =============================================================================

/// Default gRPC listen port.
pub const DEFAULT_PORT: u16 = 50051;
