//! Application state - Dependency injection container.
//!
//! Wires the concrete adapters into the registration controller.

use std::sync::Arc;

use crate::api::controllers::RegisterController;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Argon2Encrypter, InMemoryUserStore, UserRepository};
use crate::services::{AddUser, UserCreator};
use crate::utils::{EmailValidator, EmailValidatorAdapter};

/// Application state containing the controller and its storage.
#[derive(Clone)]
pub struct AppState {
    /// Registration controller
    pub register_controller: Arc<RegisterController>,
    /// User storage shared by every request
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Build the production graph from configuration.
    ///
    /// # Errors
    /// Fails when the configured hashing parameters are rejected.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let encrypter = Arc::new(Argon2Encrypter::new(config)?);
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserStore::new());

        Ok(Self::new(
            Arc::new(EmailValidatorAdapter::new()),
            Arc::new(UserCreator::new(encrypter, users.clone())),
            users,
        ))
    }

    /// Create application state with manually injected collaborators.
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_user: Arc<dyn AddUser>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            register_controller: Arc::new(RegisterController::new(email_validator, add_user)),
            users,
        }
    }
}
