//! Uncaught-error handling capability.

pub mod handler;

pub use handler::{DefaultExceptionHandler, ExceptionHandler};
