//! Core library for the Gantry application framework.
//!
//! Gantry's job is the wiring that happens before a request or command is
//! ever served: building the [`Application`](kernel::Application) container,
//! resolving the runtime and cache directories, and registering the HTTP
//! kernel, console kernel, and exception handler bindings. Running the
//! resulting application is the caller's responsibility.

pub mod console;
pub mod exceptions;
pub mod http;
pub mod kernel;
pub mod runtime;
pub mod storage;

// Re-export key public types for the binary and embedders.
pub use kernel::Application;
pub use kernel::error::Error as KernelError;
pub use console::ConsoleKernel;
pub use exceptions::ExceptionHandler;
pub use http::HttpKernel;
pub use runtime::RuntimePaths;
pub use storage::StorageProvider;
