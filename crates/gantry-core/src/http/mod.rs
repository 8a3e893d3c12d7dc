//! HTTP entry-point capability.
//!
//! Only the seam is defined here: the [`HttpKernel`](kernel::HttpKernel)
//! trait the container binds, minimal request/response value types, and a
//! default implementation. Routing, middleware, and the rest of the
//! request lifecycle live outside this crate.

pub mod kernel;

pub use kernel::{DefaultHttpKernel, HttpKernel};

/// Minimal HTTP request representation handed to the kernel.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub path: String,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

/// Minimal HTTP response representation returned by the kernel.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
