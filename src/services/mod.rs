//! Application services layer - Use cases.
//!
//! Services orchestrate domain types and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod add_user;

pub use add_user::{AddUser, UserCreator};

#[cfg(any(test, feature = "test-utils"))]
pub use add_user::MockAddUser;
