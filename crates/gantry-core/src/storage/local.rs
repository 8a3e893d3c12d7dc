use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::kernel::error::{Error, Result};
use crate::storage::provider::StorageProvider;

/// Local filesystem storage provider
#[derive(Clone)]
pub struct LocalStorageProvider {
    base_path: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider with the given base path
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Resolve a relative path against the base path.
    /// Absolute paths pass through unchanged.
    fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.base_path.join(path)
    }
}

impl StorageProvider for LocalStorageProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve_path(path).exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.resolve_path(path).is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolve_path(path).is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let full_path = self.resolve_path(path);
        fs::create_dir_all(&full_path).map_err(|e| Error::io(e, "create_dir_all", full_path))
    }

    #[cfg(unix)]
    fn create_dir_all_permissive(&self, path: &Path) -> Result<()> {
        use std::os::unix::fs::DirBuilderExt;
        let full_path = self.resolve_path(path);
        fs::DirBuilder::new()
            .recursive(true)
            .mode(0o777)
            .create(&full_path)
            .map_err(|e| Error::io(e, "create_dir_all_permissive", full_path))
    }

    #[cfg(not(unix))]
    fn create_dir_all_permissive(&self, path: &Path) -> Result<()> {
        // No mode bits off Unix; recursive creation is the whole contract.
        self.create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve_path(path);
        fs::read_to_string(&full_path).map_err(|e| Error::io(e, "read_to_string", full_path))
    }
}

impl fmt::Debug for LocalStorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStorageProvider")
            .field("base_path", &self.base_path)
            .finish()
    }
}
