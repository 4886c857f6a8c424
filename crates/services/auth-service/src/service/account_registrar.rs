//! Account registration (sign-up).

use std::sync::Arc;

use common::AppResult;
use domain::Account;

use crate::repository::AccountRepository;

/// Creates a new account record from a username/password pair.
///
/// There is no pre-check for an existing username: whether a duplicate
/// succeeds or fails is decided by the storage layer's constraints, and a
/// constraint violation surfaces as a persistence failure.
pub struct AccountRegistrar {
    accounts: Arc<dyn AccountRepository>,
}

impl AccountRegistrar {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Create the account and return it.
    pub async fn register(&self, username: String, password: String) -> AppResult<Account> {
        let account = self.accounts.create(username, password).await?;

        tracing::debug!(account_id = %account.id, "account registered");
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAccountRepository;
    use uuid::Uuid;

    #[tokio::test]
    async fn register_creates_account_without_uniqueness_precheck() {
        let mut repo = MockAccountRepository::new();
        // Exactly one store call: create, no find.
        repo.expect_find_by_credentials().never();
        repo.expect_create()
            .times(1)
            .returning(|username, password| Ok(Account::new(Uuid::new_v4(), username, password)));

        let registrar = AccountRegistrar::new(Arc::new(repo));
        let account = registrar
            .register("alice".into(), "secret".into())
            .await
            .unwrap();
        assert_eq!(account.username, "alice");
    }
}
