use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::kernel::constants;
use crate::kernel::container::ServiceContainer;
use crate::kernel::error::Result;

use crate::console::{ConsoleKernel, DefaultConsoleKernel};
use crate::exceptions::{DefaultExceptionHandler, ExceptionHandler};
use crate::http::{DefaultHttpKernel, HttpKernel};
use crate::runtime::paths::RuntimePaths;
use crate::storage::local::LocalStorageProvider;
use crate::storage::provider::StorageProvider;

/// The application container: base installation path, runtime path
/// resolver, and the service bindings the framework resolves its
/// entry-point handlers through.
///
/// Construction is the whole bootstrap sequence — linear, one-shot, no
/// retries. The configured instance is returned to the caller, which owns
/// the actual request/command lifecycle and the process exit status.
pub struct Application {
    base_path: PathBuf,
    paths: Arc<RuntimePaths>,
    services: Arc<Mutex<ServiceContainer>>,
}

impl Application {
    /// Bootstrap an application rooted at `base_path`.
    ///
    /// `base_path` should be absolute (callers typically canonicalize the
    /// installation directory first).
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        let provider: Arc<dyn StorageProvider> =
            Arc::new(LocalStorageProvider::new(base_path.clone()));
        Self::with_provider(base_path, provider)
    }

    /// Bootstrap over a caller-supplied storage provider.
    pub fn with_provider(
        base_path: impl Into<PathBuf>,
        provider: Arc<dyn StorageProvider>,
    ) -> Result<Self> {
        let base_path = base_path.into();
        log::info!(
            "Bootstrapping {} v{} at {}",
            constants::APP_NAME,
            constants::APP_VERSION,
            base_path.display()
        );

        let paths = Arc::new(RuntimePaths::new(base_path.clone(), provider));

        let mut services = ServiceContainer::new();

        let http_paths = paths.clone();
        services.singleton::<dyn HttpKernel, _>(move || {
            Arc::new(DefaultHttpKernel::new(http_paths.clone())) as Arc<dyn HttpKernel>
        });

        let console_paths = paths.clone();
        services.singleton::<dyn ConsoleKernel, _>(move || {
            Arc::new(DefaultConsoleKernel::new(console_paths.clone())) as Arc<dyn ConsoleKernel>
        });

        services.singleton::<dyn ExceptionHandler, _>(|| {
            Arc::new(DefaultExceptionHandler::new()) as Arc<dyn ExceptionHandler>
        });

        Ok(Application {
            base_path,
            paths,
            services: Arc::new(Mutex::new(services)),
        })
    }

    /// The application's base installation path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The runtime path resolver.
    pub fn paths(&self) -> &Arc<RuntimePaths> {
        &self.paths
    }

    /// Resolve the singleton bound for capability `S`.
    ///
    /// The implementation is constructed on the first resolution and reused
    /// for every subsequent one. Returns `None` for an unbound capability.
    pub async fn resolve<S>(&self) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let mut services = self.services.lock().await;
        services.resolve::<S>()
    }

    /// Whether a binding is registered for capability `S`.
    pub async fn has_binding<S>(&self) -> bool
    where
        S: ?Sized + 'static,
    {
        let services = self.services.lock().await;
        services.contains::<S>()
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("base_path", &self.base_path)
            .finish()
    }
}
