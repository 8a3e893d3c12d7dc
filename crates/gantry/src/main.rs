use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use gantry_core::console::ConsoleKernel;
use gantry_core::exceptions::ExceptionHandler;
use gantry_core::http::HttpKernel;
use gantry_core::kernel::bootstrap::Application;
use gantry_core::kernel::error::Result as KernelResult;

/// Gantry: web-application bootstrap layer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Application base path (defaults to the current directory)
    #[arg(long)]
    base_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved runtime, cache, and cache-artifact paths
    Paths {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Dispatch a command to the console kernel
    Call {
        /// The command name
        command: String,
        /// Arguments passed through to the command
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();

    let base_path = args
        .base_path
        .unwrap_or_else(|| PathBuf::from("."));
    let base_path = match std::path::absolute(&base_path) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Failed to resolve base path {}: {}", base_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    // Bootstrap is fatal on failure; there is no degraded mode without a
    // usable runtime directory.
    let app = match Application::new(base_path) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to bootstrap application: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Some(Commands::Paths { json }) => match print_paths(&app, json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report_and_fail(&app, e).await,
        },
        Some(Commands::Call { command, args }) => run_console(&app, &command, &args).await,
        None => run_default(&app).await,
    }
}

/// Print the resolved path layout, triggering directory creation on the way.
fn print_paths(app: &Application, json: bool) -> KernelResult<()> {
    let paths = app.paths();
    let runtime_dir = paths.runtime_dir()?.to_path_buf();
    let cache_dir = paths.cache_dir()?.to_path_buf();
    let config = paths.cached_config_path()?;
    let routes = paths.cached_routes_path()?;
    let compiled = paths.cached_compiled_path()?;
    let services = paths.cached_services_path()?;

    if json {
        let value = serde_json::json!({
            "runtime_dir": runtime_dir,
            "cache_dir": cache_dir,
            "config": config,
            "routes": routes,
            "compiled": compiled,
            "services": services,
        });
        let rendered = serde_json::to_string_pretty(&value)
            .map_err(|e| gantry_core::KernelError::Other(e.to_string()))?;
        println!("{}", rendered);
    } else {
        println!("runtime dir: {}", runtime_dir.display());
        println!("cache dir:   {}", cache_dir.display());
        println!("config:      {}", config.display());
        println!("routes:      {}", routes.display());
        println!("compiled:    {}", compiled.display());
        println!("services:    {}", services.display());
    }
    Ok(())
}

/// Dispatch a command through the console kernel binding.
async fn run_console(app: &Application, command: &str, args: &[String]) -> ExitCode {
    let Some(console) = app.resolve::<dyn ConsoleKernel>().await else {
        eprintln!("No console kernel is bound");
        return ExitCode::FAILURE;
    };

    match console.call(command, args).await {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => report_and_fail(app, e).await,
    }
}

/// No subcommand: bootstrap the HTTP kernel and report readiness.
async fn run_default(app: &Application) -> ExitCode {
    let Some(http) = app.resolve::<dyn HttpKernel>().await else {
        eprintln!("No HTTP kernel is bound");
        return ExitCode::FAILURE;
    };

    if let Err(e) = http.bootstrap().await {
        return report_and_fail(app, e).await;
    }

    info!("HTTP kernel '{}' bootstrapped", http.name());
    println!("Application ready at {}", app.base_path().display());
    ExitCode::SUCCESS
}

/// Route an error through the bound exception handler, then fail.
async fn report_and_fail(app: &Application, error: gantry_core::KernelError) -> ExitCode {
    match app.resolve::<dyn ExceptionHandler>().await {
        Some(handler) => handler.report(&error),
        None => eprintln!("Error: {}", error),
    }
    ExitCode::FAILURE
}
