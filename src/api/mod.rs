//! API layer - Transport-agnostic presentation
//!
//! This module contains everything between a raw request payload and the
//! response envelope:
//! - Request/response protocols
//! - Controllers
//! - Client-facing errors and response builders
//! - Dependency wiring

pub mod controllers;
pub mod errors;
pub mod helpers;
pub mod protocols;
pub mod state;

pub use controllers::RegisterController;
pub use errors::ApiError;
pub use protocols::{Controller, HttpRequest, HttpResponse, ResponseBody};
pub use state::AppState;
