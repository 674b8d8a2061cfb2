//! Email format check adapter over the `validator` crate.

use validator::ValidateEmail;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Email format validation seam used by the registration controller.
///
/// An `Err` means the check itself could not run, which the caller treats
/// as an internal failure rather than an invalid address.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}

/// HTML5-style email check, no normalization applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}
