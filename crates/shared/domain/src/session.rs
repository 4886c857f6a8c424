//! Session domain entity and freshness judgment.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A server-issued proof of a prior successful authentication.
///
/// Identified by an opaque token and a creation timestamp. `created_at` is
/// set once at issuance and never updated; freshness is re-derived on every
/// validation call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    /// Back-reference to the owning account (one account : many sessions).
    pub account_id: Uuid,
    /// Opaque token, the sole lookup key for validation.
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Validation outcome for a session against a freshness window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Fresh,
    Stale,
}

impl Session {
    /// Judge this session's age against a caller-supplied window in minutes.
    ///
    /// The comparison is a strict greater-than: a session is stale iff
    /// `now - created_at > window_minutes`. Zero or negative windows get no
    /// special-casing, so they classify every session with positive age as
    /// stale.
    pub fn status_at(&self, now: DateTime<Utc>, window_minutes: i64) -> SessionStatus {
        // Saturate windows too large for a Duration instead of panicking;
        // the wire carries an arbitrary i64.
        let window = match Duration::try_minutes(window_minutes) {
            Some(w) => w,
            None if window_minutes > 0 => Duration::MAX,
            None => Duration::MIN,
        };

        let age = now - self.created_at;
        if age > window {
            SessionStatus::Stale
        } else {
            SessionStatus::Fresh
        }
    }

    /// Whether the session is still within the freshness window.
    pub fn is_fresh(&self, now: DateTime<Utc>, window_minutes: i64) -> bool {
        self.status_at(now, window_minutes) == SessionStatus::Fresh
    }
}
