//! # Gantry Runtime Paths
//!
//! Resolution of the application's runtime directory, its cache
//! subdirectory, and the well-known cache-artifact paths the framework
//! writes its compiled state to.
//!
//! The runtime directory defaults to `<base_path>/bootstrap` but can be
//! relocated through a declarative override file
//! (`bootstrap/runtime_dir.toml`); see [`config::RuntimeDirOverride`].
//! Both directories are resolved lazily, at most once per process, by
//! [`RuntimePaths`](paths::RuntimePaths).

pub mod config;
pub mod error;
pub mod paths;

pub use config::RuntimeDirOverride;
pub use error::RuntimePathsError;
pub use paths::RuntimePaths;
