use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::kernel::constants;
use crate::kernel::error::Result;
use crate::runtime::config::RuntimeDirOverride;
use crate::storage::provider::StorageProvider;

/// Resolver for the application's runtime directory, cache directory, and
/// cache-artifact paths.
///
/// The two directories are computed lazily and memoized: the first caller
/// pays the directory-creation cost, subsequent callers get the cached
/// value, and nothing is ever recomputed within a process lifetime. A
/// failed computation is not memoized; startup treats the first failure as
/// fatal, so a populated slot always holds a valid directory.
pub struct RuntimePaths {
    base_path: PathBuf,
    provider: Arc<dyn StorageProvider>,
    runtime_dir: OnceCell<PathBuf>,
    cache_dir: OnceCell<PathBuf>,
}

impl RuntimePaths {
    /// Create a resolver rooted at the application's base installation path.
    ///
    /// `base_path` should be absolute; the resolver joins against it without
    /// normalization.
    pub fn new(base_path: PathBuf, provider: Arc<dyn StorageProvider>) -> Self {
        Self {
            base_path,
            provider,
            runtime_dir: OnceCell::new(),
            cache_dir: OnceCell::new(),
        }
    }

    /// The application's base installation path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The storage provider paths are resolved through.
    pub fn provider(&self) -> &Arc<dyn StorageProvider> {
        &self.provider
    }

    /// Resolve the runtime directory.
    ///
    /// If `<base_path>/bootstrap/runtime_dir.toml` exists, the directory it
    /// names wins and is created (recursively, permissive mode) when absent.
    /// Otherwise the runtime directory is `<base_path>/bootstrap`, with no
    /// creation attempted.
    ///
    /// Errors propagate to the caller: an application without a usable
    /// runtime directory must not start.
    pub fn runtime_dir(&self) -> Result<&Path> {
        self.runtime_dir
            .get_or_try_init(|| self.resolve_runtime_dir())
            .map(PathBuf::as_path)
    }

    fn resolve_runtime_dir(&self) -> Result<PathBuf> {
        let override_file = self
            .base_path
            .join(constants::RUNTIME_DIR_NAME)
            .join(constants::RUNTIME_DIR_OVERRIDE_FILE);

        if self.provider.is_file(&override_file) {
            let dir = RuntimeDirOverride::load(self.provider.as_ref(), &override_file)?;
            log::info!(
                "Runtime directory overridden via {}: {}",
                override_file.display(),
                dir.display()
            );
            if !self.provider.is_dir(&dir) {
                self.provider.create_dir_all_permissive(&dir)?;
            }
            Ok(dir)
        } else {
            Ok(self.base_path.join(constants::RUNTIME_DIR_NAME))
        }
    }

    /// Resolve the cache directory, `<runtime_dir>/cache`, creating it
    /// (recursively, permissive mode) when absent.
    pub fn cache_dir(&self) -> Result<&Path> {
        self.cache_dir
            .get_or_try_init(|| {
                let dir = self.runtime_dir()?.join(constants::CACHE_DIR_NAME);
                if !self.provider.is_dir(&dir) {
                    self.provider.create_dir_all_permissive(&dir)?;
                }
                Ok(dir)
            })
            .map(PathBuf::as_path)
    }

    /// Path of the cached application configuration artifact.
    ///
    /// Derived on each call; no existence guarantee — the framework creates
    /// and reads the file at this path.
    pub fn cached_config_path(&self) -> Result<PathBuf> {
        Ok(self.cache_dir()?.join(constants::CONFIG_CACHE_FILE))
    }

    /// Path of the cached route table artifact.
    pub fn cached_routes_path(&self) -> Result<PathBuf> {
        Ok(self.cache_dir()?.join(constants::ROUTES_CACHE_FILE))
    }

    /// Path of the cached compiled-class artifact.
    pub fn cached_compiled_path(&self) -> Result<PathBuf> {
        Ok(self.cache_dir()?.join(constants::COMPILED_CACHE_FILE))
    }

    /// Path of the cached discovered-services manifest.
    pub fn cached_services_path(&self) -> Result<PathBuf> {
        Ok(self.cache_dir()?.join(constants::SERVICES_CACHE_FILE))
    }
}

impl std::fmt::Debug for RuntimePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimePaths")
            .field("base_path", &self.base_path)
            .field("runtime_dir", &self.runtime_dir.get())
            .field("cache_dir", &self.cache_dir.get())
            .finish()
    }
}
