use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::http::{Request, Response};
use crate::kernel::error::Result;
use crate::runtime::paths::RuntimePaths;

/// Entry-point handler for web requests.
#[async_trait]
pub trait HttpKernel: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    /// Prepare the kernel for serving (e.g. pick up cached framework state).
    async fn bootstrap(&self) -> Result<()>;

    /// Handle a single request.
    async fn handle(&self, request: Request) -> Result<Response>;
}

/// Default HTTP kernel.
///
/// Knows where the framework's cache artifacts live but carries no routing
/// table, so every request answers 404.
#[derive(Debug)]
pub struct DefaultHttpKernel {
    paths: Arc<RuntimePaths>,
}

impl DefaultHttpKernel {
    pub fn new(paths: Arc<RuntimePaths>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl HttpKernel for DefaultHttpKernel {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn bootstrap(&self) -> Result<()> {
        let provider = self.paths.provider();
        for artifact in [
            self.paths.cached_config_path()?,
            self.paths.cached_routes_path()?,
        ] {
            if provider.is_file(&artifact) {
                log::info!("Using cached artifact {}", artifact.display());
            } else {
                log::debug!("No cached artifact at {}", artifact.display());
            }
        }
        Ok(())
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        log::debug!("Handling {} {}", request.method, request.path);
        Ok(Response::new(404, "Not Found"))
    }
}
