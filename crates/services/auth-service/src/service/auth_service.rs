//! Authentication façade composing the core components.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::AppResult;
use domain::Account;

use crate::repository::{AccountRepository, SessionRepository};

use super::{AccountRegistrar, CredentialVerifier, SessionIssuer, SessionValidator, ValidationOutcome};

/// Result of a successful login: the verified account plus its new session
/// token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub account_id: Uuid,
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a fresh session.
    async fn login(&self, username: String, password: String) -> AppResult<LoginOutcome>;

    /// Create a new account.
    async fn sign_up(&self, username: String, password: String) -> AppResult<Account>;

    /// Judge an existing session against a caller-supplied window.
    async fn validate_token(
        &self,
        token: &str,
        expiration_minutes: i64,
    ) -> AppResult<ValidationOutcome>;
}

/// Concrete implementation of AuthService.
///
/// Each operation is an independent unit of work: a bounded sequence of
/// reads followed by at most one write against the injected repositories,
/// with no in-process session cache and no locks.
pub struct Authenticator {
    verifier: CredentialVerifier,
    issuer: SessionIssuer,
    validator: SessionValidator,
    registrar: AccountRegistrar,
}

impl Authenticator {
    /// Create new auth service instance over the persistence gateways.
    pub fn new(accounts: Arc<dyn AccountRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            verifier: CredentialVerifier::new(accounts.clone()),
            issuer: SessionIssuer::new(sessions.clone()),
            validator: SessionValidator::new(sessions),
            registrar: AccountRegistrar::new(accounts),
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: String, password: String) -> AppResult<LoginOutcome> {
        let account = self.verifier.verify(&username, &password).await?;

        // No session is issued unless verification succeeded.
        let session = self.issuer.issue(&account).await?;

        tracing::info!(account_id = %account.id, "login successful");
        Ok(LoginOutcome {
            account_id: account.id,
            token: session.token,
        })
    }

    async fn sign_up(&self, username: String, password: String) -> AppResult<Account> {
        let account = self.registrar.register(username, password).await?;

        tracing::info!(account_id = %account.id, "account created");
        Ok(account)
    }

    async fn validate_token(
        &self,
        token: &str,
        expiration_minutes: i64,
    ) -> AppResult<ValidationOutcome> {
        self.validator.validate(token, expiration_minutes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockAccountRepository, MockSessionRepository};
    use chrono::Utc;
    use common::AppError;
    use domain::Session;

    #[tokio::test]
    async fn login_issues_session_after_verification() {
        let account = Account::new(Uuid::new_v4(), "alice".into(), "secret".into());
        let account_id = account.id;

        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_credentials()
            .returning(move |_, _| Ok(Some(account.clone())));

        let mut sessions = MockSessionRepository::new();
        sessions.expect_create().times(1).returning(|account_id| {
            Ok(Session {
                id: Uuid::new_v4(),
                account_id,
                token: Uuid::new_v4().to_string(),
                created_at: Utc::now(),
            })
        });

        let service = Authenticator::new(Arc::new(accounts), Arc::new(sessions));
        let outcome = service
            .login("alice".into(), "secret".into())
            .await
            .unwrap();
        assert_eq!(outcome.account_id, account_id);
        assert!(!outcome.token.is_empty());
    }

    #[tokio::test]
    async fn login_failure_issues_no_session() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_credentials()
            .returning(|_, _| Ok(None));

        let mut sessions = MockSessionRepository::new();
        sessions.expect_create().never();

        let service = Authenticator::new(Arc::new(accounts), Arc::new(sessions));
        let err = service
            .login("alice".into(), "wrong".into())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn persistence_failure_surfaces_without_retry() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_credentials()
            .times(1)
            .returning(|_, _| Err(AppError::internal("connection reset")));

        let sessions = MockSessionRepository::new();

        let service = Authenticator::new(Arc::new(accounts), Arc::new(sessions));
        let err = service
            .login("alice".into(), "secret".into())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
