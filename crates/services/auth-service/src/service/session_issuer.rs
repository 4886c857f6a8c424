//! Session issuance after successful credential verification.

use std::sync::Arc;

use common::AppResult;
use domain::{Account, Session};

use crate::repository::SessionRepository;

/// Creates a new session record with a fresh opaque token.
pub struct SessionIssuer {
    sessions: Arc<dyn SessionRepository>,
}

impl SessionIssuer {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Persist a new session for a verified account and return it, token
    /// included. Token generation and its uniqueness guarantee live in the
    /// session store.
    pub async fn issue(&self, account: &Account) -> AppResult<Session> {
        let session = self.sessions.create(account.id).await?;

        tracing::debug!(account_id = %account.id, session_id = %session.id, "session issued");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockSessionRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use uuid::Uuid;

    #[tokio::test]
    async fn issue_creates_session_for_the_account() {
        let account = Account::new(Uuid::new_v4(), "alice".into(), "secret".into());
        let account_id = account.id;

        let mut repo = MockSessionRepository::new();
        repo.expect_create()
            .with(eq(account_id))
            .returning(|account_id| {
                Ok(Session {
                    id: Uuid::new_v4(),
                    account_id,
                    token: Uuid::new_v4().to_string(),
                    created_at: Utc::now(),
                })
            });

        let issuer = SessionIssuer::new(Arc::new(repo));
        let session = issuer.issue(&account).await.unwrap();
        assert_eq!(session.account_id, account_id);
        assert!(!session.token.is_empty());
    }
}
