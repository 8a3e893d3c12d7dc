use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::kernel::constants;
use crate::kernel::error::Result;
use crate::runtime::paths::RuntimePaths;

/// Entry-point handler for command-line invocations.
#[async_trait]
pub trait ConsoleKernel: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    /// Run a command, returning the process exit code.
    async fn call(&self, command: &str, args: &[String]) -> Result<i32>;
}

/// Default console kernel with the single `about` built-in.
#[derive(Debug)]
pub struct DefaultConsoleKernel {
    paths: Arc<RuntimePaths>,
}

impl DefaultConsoleKernel {
    pub fn new(paths: Arc<RuntimePaths>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl ConsoleKernel for DefaultConsoleKernel {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn call(&self, command: &str, args: &[String]) -> Result<i32> {
        match command {
            "about" => {
                println!("{} v{}", constants::APP_NAME, constants::APP_VERSION);
                println!("runtime dir: {}", self.paths.runtime_dir()?.display());
                println!("cache dir:   {}", self.paths.cache_dir()?.display());
                Ok(0)
            }
            _ => {
                log::error!("Unknown console command '{}' (args: {:?})", command, args);
                Ok(1)
            }
        }
    }
}
