//! User creation use case.
//!
//! Hashes the password first, then hands the hashed credentials to the
//! repository. Errors from either collaborator are returned unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{AddUserModel, UserRecord};
use crate::errors::AppResult;
use crate::infra::{Encrypter, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User creation trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddUser: Send + Sync {
    /// Create a new user from plain text credentials
    async fn add(&self, user: AddUserModel) -> AppResult<UserRecord>;
}

/// Concrete implementation of AddUser backed by an encrypter and a repository.
pub struct UserCreator {
    encrypter: Arc<dyn Encrypter>,
    repo: Arc<dyn UserRepository>,
}

impl UserCreator {
    /// Create new use case instance
    pub fn new(encrypter: Arc<dyn Encrypter>, repo: Arc<dyn UserRepository>) -> Self {
        Self { encrypter, repo }
    }
}

#[async_trait]
impl AddUser for UserCreator {
    async fn add(&self, user: AddUserModel) -> AppResult<UserRecord> {
        let password_hash = self.encrypter.encrypt(&user.password).await?;

        let record = self
            .repo
            .create(user.username, user.email, password_hash)
            .await?;

        tracing::info!(user_id = %record.id, "User created");
        Ok(record)
    }
}
