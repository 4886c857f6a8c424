//! Time-windowed session validation.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use common::{AppResult, OptionExt};

use crate::repository::SessionRepository;

/// Result of judging a session against a freshness window.
///
/// `Stale` is a normal outcome, not an error: the call succeeds and the
/// response carries "not authorized".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The session is within its window; carries the session id.
    Authenticated(Uuid),
    /// The session's age exceeds the caller-supplied window.
    Stale,
}

/// Fetches a session by token and judges its freshness.
///
/// The window is supplied per call, never server configuration. Nothing is
/// persisted: the classification is re-derived on every call from
/// `created_at` and the current clock.
pub struct SessionValidator {
    sessions: Arc<dyn SessionRepository>,
}

impl SessionValidator {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Validate the token against the freshness window in minutes.
    ///
    /// An unknown token is a call failure (`NotFound`); a known but aged
    /// token is a successful call with `ValidationOutcome::Stale`.
    pub async fn validate(
        &self,
        token: &str,
        expiration_minutes: i64,
    ) -> AppResult<ValidationOutcome> {
        let session = self.sessions.find_by_token(token).await?.ok_or_not_found()?;

        if session.is_fresh(Utc::now(), expiration_minutes) {
            Ok(ValidationOutcome::Authenticated(session.id))
        } else {
            Ok(ValidationOutcome::Stale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockSessionRepository;
    use chrono::Duration;
    use common::AppError;
    use domain::Session;

    fn session_with_age(age: Duration) -> Session {
        Session {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            token: Uuid::new_v4().to_string(),
            created_at: Utc::now() - age,
        }
    }

    #[tokio::test]
    async fn fresh_session_is_authenticated_with_its_id() {
        let session = session_with_age(Duration::minutes(2));
        let session_id = session.id;
        let token = session.token.clone();

        let expected = token.clone();
        let mut repo = MockSessionRepository::new();
        repo.expect_find_by_token()
            .withf(move |t| t == expected)
            .returning(move |_| Ok(Some(session.clone())));

        let validator = SessionValidator::new(Arc::new(repo));
        let outcome = validator.validate(&token, 5).await.unwrap();
        assert_eq!(outcome, ValidationOutcome::Authenticated(session_id));
    }

    #[tokio::test]
    async fn aged_session_is_stale_not_an_error() {
        let session = session_with_age(Duration::minutes(6));
        let token = session.token.clone();

        let mut repo = MockSessionRepository::new();
        repo.expect_find_by_token()
            .returning(move |_| Ok(Some(session.clone())));

        let validator = SessionValidator::new(Arc::new(repo));
        let outcome = validator.validate(&token, 5).await.unwrap();
        assert_eq!(outcome, ValidationOutcome::Stale);
    }

    #[tokio::test]
    async fn unknown_token_is_a_not_found_failure() {
        let mut repo = MockSessionRepository::new();
        repo.expect_find_by_token().returning(|_| Ok(None));

        let validator = SessionValidator::new(Arc::new(repo));
        let err = validator.validate("bogus", 5).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn zero_window_stales_any_aged_session() {
        let session = session_with_age(Duration::seconds(1));
        let token = session.token.clone();

        let mut repo = MockSessionRepository::new();
        repo.expect_find_by_token()
            .returning(move |_| Ok(Some(session.clone())));

        let validator = SessionValidator::new(Arc::new(repo));
        let outcome = validator.validate(&token, 0).await.unwrap();
        assert_eq!(outcome, ValidationOutcome::Stale);
    }

    #[tokio::test]
    async fn negative_window_is_accepted() {
        let session = session_with_age(Duration::minutes(1));
        let token = session.token.clone();

        let mut repo = MockSessionRepository::new();
        repo.expect_find_by_token()
            .returning(move |_| Ok(Some(session.clone())));

        let validator = SessionValidator::new(Arc::new(repo));
        let outcome = validator.validate(&token, -10).await.unwrap();
        assert_eq!(outcome, ValidationOutcome::Stale);
    }
}
