//! Account domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user's identity and credential record.
///
/// The credential is stored and compared as the raw secret; hashing is a
/// deliberate non-goal here. Production deployments should substitute a
/// salted one-way hash at the storage and verification seams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account record.
    pub fn new(id: Uuid, username: String, password: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            password,
            created_at: now,
            updated_at: now,
        }
    }

    /// Compare the stored credential pair against supplied input.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
