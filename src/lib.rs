//! User registration - validation and creation of user accounts
//!
//! A transport-agnostic registration controller in front of a small
//! clean architecture stack.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities
//! - **services**: Application use cases
//! - **infra**: Password hashing and persistence
//! - **api**: Request/response protocols, controllers, response builders
//! - **utils**: Adapters over third-party helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Register a single user
//! cargo run -- register --username alice --email alice@mail.com \
//!     --password1 secret --password2 secret
//!
//! # Replay a batch of request bodies
//! cargo run -- register --file requests.json
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::{AppState, Controller, HttpRequest, HttpResponse, RegisterController};
pub use config::Config;
pub use domain::{AddUserModel, UserRecord};
pub use errors::{AppError, AppResult};
