//! Credential verification against the account store.

use std::sync::Arc;

use common::{AppError, AppResult};
use domain::Account;

use crate::repository::AccountRepository;

/// Checks a username/password pair against stored accounts.
///
/// Read-only: verification has no side effects.
pub struct CredentialVerifier {
    accounts: Arc<dyn AccountRepository>,
}

impl CredentialVerifier {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Verify the supplied credential pair and return the matching account.
    ///
    /// A lookup miss and a post-fetch mismatch both surface to the caller
    /// as the same unauthenticated failure, so unknown-user and
    /// wrong-password stay indistinguishable.
    pub async fn verify(&self, username: &str, password: &str) -> AppResult<Account> {
        let account = self
            .accounts
            .find_by_credentials(username, password)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Re-check the fetched row against the input, in case the store
        // did a partial match.
        if !account.matches(username, password) {
            return Err(AppError::Mismatch);
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAccountRepository;
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn stored_account(username: &str, password: &str) -> Account {
        Account::new(Uuid::new_v4(), username.to_string(), password.to_string())
    }

    #[tokio::test]
    async fn verify_returns_account_on_match() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_credentials()
            .with(eq("alice"), eq("secret"))
            .returning(|u, p| Ok(Some(stored_account(u, p))));

        let verifier = CredentialVerifier::new(Arc::new(repo));
        let account = verifier.verify("alice", "secret").await.unwrap();
        assert_eq!(account.username, "alice");
    }

    #[tokio::test]
    async fn verify_fails_when_no_account_matches() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_credentials().returning(|_, _| Ok(None));

        let verifier = CredentialVerifier::new(Arc::new(repo));
        let err = verifier.verify("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn verify_rejects_partial_match_from_store() {
        // Store returns a row whose password differs from the input.
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_credentials()
            .returning(|u, _| Ok(Some(stored_account(u, "something-else"))));

        let verifier = CredentialVerifier::new(Arc::new(repo));
        let err = verifier.verify("alice", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::Mismatch));
    }

    #[test]
    fn lookup_miss_and_mismatch_produce_the_same_status() {
        use tonic::Status;

        let miss: Status = AppError::InvalidCredentials.into();
        let mismatch: Status = AppError::Mismatch.into();
        assert_eq!(miss.code(), mismatch.code());
        assert_eq!(miss.message(), mismatch.message());
    }
}
