//! Error types for natpp operations.
//!
//! Usage errors ([`CliError`]) are reported to the user and end the run without
//! side effects. Everything else is a collaborator failure and aborts the run.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for natpp operations
pub type Result<T> = std::result::Result<T, NatppError>;

/// Main error type for all natpp operations
#[derive(Error, Debug)]
pub enum NatppError {
    /// CLI usage errors
    #[error("{0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO errors with the action and path that caused them
    #[error("Failed {action} at {}: {error}", path.display())]
    Fs {
        /// What was being attempted
        action: String,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: std::io::Error,
    },

    /// A required external tool is not installed
    #[error("{tool} not found on PATH: {reason}")]
    ToolNotFound {
        /// Tool name
        tool: String,
        /// Lookup failure
        reason: String,
    },

    /// An external command could not be started
    #[error("Failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command line that was attempted
        command: String,
        /// Spawn error
        #[source]
        error: std::io::Error,
    },

    /// The native shell build exited unsuccessfully
    #[error("Build failed: {command} - {reason}")]
    BuildFailed {
        /// Build command line
        command: String,
        /// Exit status and captured stderr
        reason: String,
    },

    /// HTTP errors from the favicon request
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Shortcut file could not be written
    #[error("Failed to write shortcut {}: {reason}", path.display())]
    Shortcut {
        /// Shortcut path
        path: PathBuf,
        /// Writer error
        reason: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Positional argument does not look like a web URL
    #[error("unknown url {url}")]
    InvalidUrl {
        /// Argument as given
        url: String,
    },

    /// No `--name` given and no hostname could be extracted
    #[error("cannot derive an app name from {url}, pass one with --name")]
    UnresolvedName {
        /// URL the hostname extraction ran on
        url: String,
    },

    /// App name cannot be used as a file name on the desktop
    #[error("invalid app name {name:?}, it must not contain path separators")]
    InvalidName {
        /// Name as given
        name: String,
    },

    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl NatppError {
    /// Usage errors end the run gracefully; all others are fatal.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Cli(_))
    }
}

impl CliError {
    /// Process exit code after reporting this error.
    ///
    /// A URL that is not a web URL ends the run quietly with 0, matching a
    /// run that simply had nothing to do. Everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidUrl { .. } => 0,
            _ => 1,
        }
    }
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wrap an IO error with the action being performed and the path involved.
    fn fs_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|error| NatppError::Fs {
            action: action.to_string(),
            path: path.to_path_buf(),
            error,
        })
    }
}
