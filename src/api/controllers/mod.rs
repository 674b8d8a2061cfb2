//! Request controllers.

mod register;

pub use register::RegisterController;
