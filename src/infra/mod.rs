//! Infrastructure layer - External systems integration
//!
//! This module handles the concrete collaborators of the use cases:
//! - Password hashing (Argon2)
//! - User persistence

pub mod encrypter;
pub mod repositories;

pub use encrypter::{Argon2Encrypter, Encrypter};
pub use repositories::{InMemoryUserStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use encrypter::MockEncrypter;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
