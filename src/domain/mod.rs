//! Domain layer - Core business entities
//!
//! Plain data types shared by every other layer. No I/O lives here.

pub mod user;

pub use user::{AddUserModel, UserRecord};
