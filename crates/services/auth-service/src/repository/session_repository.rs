//! Session repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::session::{self, ActiveModel, Entity as SessionEntity};
use common::{AppError, AppResult};
use domain::Session;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session persistence gateway consumed by the core.
///
/// Sessions are only ever created and read; there is no update, delete, or
/// expiry sweep. Rows accumulate until an external process removes them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session for the account, generating a fresh opaque
    /// token and stamping the creation instant.
    async fn create(&self, account_id: Uuid) -> AppResult<Session>;

    /// Find a session by exact token match.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>>;
}

/// Concrete implementation of SessionRepository backed by SeaORM.
pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn create(&self, account_id: Uuid) -> AppResult<Session> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(account_id),
            // UUID v4, unique among all existing sessions; the unique index
            // on the column backs the guarantee.
            token: Set(Uuid::new_v4().to_string()),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Session::from(model))
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        let result = SessionEntity::find()
            .filter(session::Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Session::from))
    }
}
