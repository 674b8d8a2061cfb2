//! User repository with an in-memory store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::UserRecord;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. The password must already be hashed.
    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> AppResult<UserRecord>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserRecord>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

/// Process-local implementation of UserRepository.
///
/// Records live as long as the store; ids are random UUIDs.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> AppResult<UserRecord> {
        let id = Uuid::new_v4().to_string();
        let record = UserRecord::new(id.clone(), username, email, password_hash);

        self.users.write().await.insert(id, record.clone());
        tracing::debug!(user_id = %record.id, "User stored");

        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }
}
