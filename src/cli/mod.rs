//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `register` - Submit registration requests

pub mod args;

pub use args::{Cli, Commands, RegisterArgs};
