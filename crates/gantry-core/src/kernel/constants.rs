/// Application name
pub const APP_NAME: &str = "Gantry";

/// Application version
pub const APP_VERSION: &str = "0.1.0";

/// Directory under the base path holding bootstrap artifacts.
/// Doubles as the default runtime directory when no override is configured.
pub const RUNTIME_DIR_NAME: &str = "bootstrap";

/// Subdirectory of the runtime directory for framework cache artifacts
pub const CACHE_DIR_NAME: &str = "cache";

/// Optional runtime-directory override file, located in the bootstrap directory
pub const RUNTIME_DIR_OVERRIDE_FILE: &str = "runtime_dir.toml";

/// Cached application configuration artifact
pub const CONFIG_CACHE_FILE: &str = "config.json";

/// Cached route table artifact
pub const ROUTES_CACHE_FILE: &str = "routes.json";

/// Cached compiled-class artifact
pub const COMPILED_CACHE_FILE: &str = "compiled.json";

/// Cached discovered-services manifest
pub const SERVICES_CACHE_FILE: &str = "services.json";
