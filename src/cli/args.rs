//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// User registration - validate and create users from the command line
#[derive(Parser, Debug)]
#[command(name = "user-registration")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run registration requests through the controller
    Register(RegisterArgs),
}

/// Arguments for the register command.
///
/// Every field is optional so incomplete requests can be submitted.
#[derive(Parser, Debug, Default)]
pub struct RegisterArgs {
    /// Desired username
    #[arg(long)]
    pub username: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Password
    #[arg(long)]
    pub password1: Option<String>,

    /// Password confirmation
    #[arg(long)]
    pub password2: Option<String>,

    /// JSON file holding one request body or an array of them
    #[arg(short, long, conflicts_with_all = ["username", "email", "password1", "password2"])]
    pub file: Option<PathBuf>,
}
