//! Error types for cordwrap
//!
//! Library code uses `thiserror`; the binary reports through a single
//! top-level handler that maps error kinds to exit codes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cordwrap operations
pub type WrapResult<T> = Result<T, WrapError>;

/// Main error type for cordwrap operations
#[derive(Error, Debug)]
pub enum WrapError {
    /// Project-root marker file is missing
    #[error("package.json not found in {root} - cordwrap must be run inside the front-end project")]
    MarkerNotFound { root: PathBuf },

    /// External command could not be started at all
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External command ran and exited non-zero
    #[error("command '{command}' failed with exit code {code:?}")]
    CommandFailed { command: String, code: Option<i32> },

    /// User declined a destructive confirmation
    #[error("aborted by user")]
    Aborted,

    /// Confirmation required but stdin is not a terminal
    #[error("stdin is not a terminal - re-run with --yes to confirm '{action}' non-interactively")]
    NotInteractive { action: String },

    /// Expected build artifact was never produced
    #[error("expected build artifact not found: {path}")]
    MissingArtifact { path: PathBuf },

    /// Plugin list file could not be read
    #[error("cannot read plugin file {path}: {source}")]
    PluginFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WrapError {
    /// Exit code the binary reports for this error.
    ///
    /// Precondition failures (wrong directory) exit 2, a declined
    /// confirmation exits 130, everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            WrapError::MarkerNotFound { .. } => 2,
            WrapError::Aborted => 130,
            _ => 1,
        }
    }
}
