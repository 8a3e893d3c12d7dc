use std::fmt::Debug;

use crate::http::Response;
use crate::kernel::error::Error;

/// Handler for errors nothing else caught.
pub trait ExceptionHandler: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    /// Record the error (logging, crash reporting).
    fn report(&self, error: &Error);

    /// Render the error into a response for the client.
    fn render(&self, error: &Error) -> Response;
}

/// Default handler: log the error, answer a plain 500.
#[derive(Debug, Default)]
pub struct DefaultExceptionHandler;

impl DefaultExceptionHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ExceptionHandler for DefaultExceptionHandler {
    fn name(&self) -> &'static str {
        "exceptions"
    }

    fn report(&self, error: &Error) {
        log::error!("Unhandled error: {}", error);
    }

    fn render(&self, _error: &Error) -> Response {
        Response::new(500, "Internal Server Error")
    }
}
