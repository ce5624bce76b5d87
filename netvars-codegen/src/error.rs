//! Error types for code generation.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Registry loading, resolution or validation error.
    #[error("schema error: {0}")]
    Schema(#[from] netvars_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be moved into place.
    #[error("failed to write '{}': {source}", .path.display())]
    Persist {
        /// Destination path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Error type for the external formatting pass.
///
/// Never fatal: it is reported as a diagnostic.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter could not be started.
    #[error("formatter '{program}' unavailable: {source}")]
    Unavailable {
        /// Formatter program.
        program: String,
        /// Spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The formatter ran and failed.
    #[error("formatter '{program}' exited with {status}: {stderr}")]
    Failed {
        /// Formatter program.
        program: String,
        /// Exit status.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },
}
