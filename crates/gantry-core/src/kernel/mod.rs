//! # Gantry Kernel
//!
//! The `kernel` module is the heart of `gantry-core`. It owns application
//! bootstrapping and the service container through which the framework's
//! entry-point capabilities are resolved.
//!
//! ## Key responsibilities & components:
//!
//! - **Application bootstrapping**: constructing the container, the runtime
//!   path resolver, and the three singleton service bindings. Managed by the
//!   [`Application`](bootstrap::Application) struct in the `bootstrap`
//!   submodule.
//! - **Service bindings**: capability-to-implementation registrations with
//!   lazy singleton semantics, held by the
//!   [`ServiceContainer`](container::ServiceContainer) in the `container`
//!   submodule.
//! - **Core constants**: the fixed directory and cache-artifact names in the
//!   `constants` submodule.
//! - **Error handling**: the kernel-wide [`Error`](error::Error) enum and
//!   `Result` alias in the `error` submodule.

pub mod bootstrap;
pub mod constants;
pub mod container;
pub mod error;

pub use bootstrap::Application;
pub use container::ServiceContainer;
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
