//! User domain entity and related types.

use serde::Serialize;

/// Registered user as returned by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Password hash, never sent back to clients
    #[serde(skip_serializing)]
    pub password: String,
}

impl UserRecord {
    /// Create a record from already hashed credentials
    pub fn new(id: String, username: String, email: String, password: String) -> Self {
        Self {
            id,
            username,
            email,
            password,
        }
    }
}

/// User creation data transfer object
#[derive(Clone, PartialEq, Eq)]
pub struct AddUserModel {
    pub username: String,
    pub email: String,
    /// Plain text password, hashed by the use case
    pub password: String,
}

// Don't expose the plain text password in debug output
impl std::fmt::Debug for AddUserModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddUserModel")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
