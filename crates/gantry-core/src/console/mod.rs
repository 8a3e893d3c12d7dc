//! Console entry-point capability.
//!
//! Command dispatch proper lives outside this crate; the default kernel
//! knows a single `about` built-in so the wiring can be exercised.

pub mod kernel;

pub use kernel::{ConsoleKernel, DefaultConsoleKernel};
