use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::kernel::error::Result;
use crate::runtime::error::RuntimePathsError;
use crate::storage::provider::StorageProvider;

/// Declarative runtime-directory override.
///
/// A TOML file with a single `path` key, placed next to the bootstrap
/// artifacts:
///
/// ```toml
/// path = "/var/lib/myapp/runtime"
/// ```
///
/// A relative path is used as written and resolves against the process
/// working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeDirOverride {
    path: PathBuf,
}

impl RuntimeDirOverride {
    /// Load and validate the override file, returning the directory it names.
    ///
    /// A file that exists but is unparseable, lacks the `path` key, or names
    /// an empty path is a fatal configuration error.
    pub fn load(provider: &dyn StorageProvider, file: &Path) -> Result<PathBuf> {
        let raw = provider.read_to_string(file)?;
        let parsed: RuntimeDirOverride =
            toml::from_str(&raw).map_err(|e| RuntimePathsError::MalformedOverride {
                path: file.to_path_buf(),
                reason: e.to_string(),
            })?;
        if parsed.path.as_os_str().is_empty() {
            return Err(RuntimePathsError::MalformedOverride {
                path: file.to_path_buf(),
                reason: "'path' must not be empty".to_string(),
            }
            .into());
        }
        Ok(parsed.path)
    }
}
