//! # Gantry Kernel Errors
//!
//! Defines [`Error`], the aggregate error type surfaced by kernel
//! operations. Subsystem errors (storage, runtime paths) convert into it
//! via `#[from]`, so bootstrap code can propagate everything with `?` and
//! the process entry point decides whether startup survives.

use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::runtime::error::RuntimePathsError;
use crate::storage::error::StorageSystemError;

/// Error type for the Gantry kernel
#[derive(Debug, ThisError)]
pub enum Error {
    /// Typed storage system error
    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),

    /// Typed runtime path-resolution error
    #[error("Runtime path error: {0}")]
    RuntimePaths(#[from] RuntimePathsError),

    /// Error related to service container operations or binding lookup failures.
    #[error("Service container error during operation '{operation}': {message}")]
    ServiceContainer {
        operation: String,
        capability: Option<String>,
        message: String,
    },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl Error {
    /// Wrap an I/O error with the operation and path that produced it.
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::StorageSystem(StorageSystemError::io(source, operation, path))
    }
}
