use std::fmt::Debug;
use std::path::Path;

use crate::kernel::error::Result;

/// Trait for the filesystem operations the bootstrap layer depends on.
///
/// Kept as a seam so path resolution can run against a mock provider in
/// tests; the default implementation is [`LocalStorageProvider`]
/// (re-exported from [`crate::storage`]).
///
/// [`LocalStorageProvider`]: crate::storage::LocalStorageProvider
pub trait StorageProvider: Send + Sync + Debug {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all its parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Create a directory and all its parent directories with permissive
    /// (world read/write/execute) mode, subject to the process umask.
    fn create_dir_all_permissive(&self, path: &Path) -> Result<()>;

    /// Read a file to a string
    fn read_to_string(&self, path: &Path) -> Result<String>;
}
