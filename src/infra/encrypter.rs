//! Password encrypter - Argon2id hashing behind a one-method trait.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Turns a plain text value into its stored representation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, value: &str) -> AppResult<String>;
}

/// Argon2id encrypter producing PHC strings with a random salt per call.
#[derive(Clone)]
pub struct Argon2Encrypter {
    params: Params,
}

impl std::fmt::Debug for Argon2Encrypter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2Encrypter")
            .field("m_cost", &self.params.m_cost())
            .field("t_cost", &self.params.t_cost())
            .field("p_cost", &self.params.p_cost())
            .finish()
    }
}

impl Argon2Encrypter {
    /// Build an encrypter from configured cost parameters.
    ///
    /// # Errors
    /// Returns a configuration error if argon2 rejects the parameters.
    pub fn new(config: &Config) -> AppResult<Self> {
        let params = Params::new(
            config.hash_memory_cost_kib,
            config.hash_time_cost,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::config(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    /// Verify a plain text value against a hash produced by `encrypt`.
    pub fn verify(&self, plain_text: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::debug!("Invalid hash format: {}", e);
                false
            }
        }
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, value: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(value.as_bytes(), &salt)
            .map_err(|e| AppError::encryption(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}
