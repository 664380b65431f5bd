//! Error types for the filmstrip-core library.
//!
//! All fallible operations in this crate return [`CoreResult`]. External-tool
//! failures are captured with enough context (tool name, exit status, stderr)
//! to produce a useful log line without re-running anything.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for filmstrip
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("No processable video files found")]
    NoFilesFound,

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("{0} exited with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Error waiting for {0}: {1}")]
    CommandWait(String, #[source] std::io::Error),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Extracted frame missing at {}", .0.display())]
    FrameMissing(PathBuf),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for filmstrip operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a tool that could not be launched.
pub fn command_start_error(cmd: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Builds a `CommandFailed` error from a tool's exit status and stderr text.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}

/// Builds a `CommandWait` error for a tool whose exit could not be observed.
pub fn command_wait_error(cmd: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}
