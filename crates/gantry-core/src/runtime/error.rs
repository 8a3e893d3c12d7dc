use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimePathsError {
    /// The override file exists but does not yield a usable directory path.
    /// Misconfiguration is fatal; falling back silently would mask it.
    #[error("Runtime directory override file '{path}' is malformed: {reason}")]
    MalformedOverride { path: PathBuf, reason: String },
}
