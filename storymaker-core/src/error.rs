// ============================================================================
// storymaker-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Snippet Pipeline
//
// Every failure in the pipeline surfaces as a `CoreError`. Nothing is
// recovered locally: the caller (normally the CLI) reports the error and
// terminates the run.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by storymaker-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot open input video '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Interval {start:.3}s..{end:.3}s is outside the source duration of {duration:.3}s")]
    IntervalOutOfRange { start: f64, end: f64, duration: f64 },

    #[error("Invalid crop rectangle: {0}")]
    InvalidCrop(String),

    #[error("Encoding '{path}' failed: {message}")]
    Encode { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Video info error: {0}")]
    VideoInfoError(String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Required dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed waiting for '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("'{cmd}' exited with {status}: {stderr}")]
    CommandFailed {
        cmd: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Result type for storymaker-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        cmd: cmd.into(),
        status,
        stderr: stderr.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_error_message_includes_bounds() {
        let err = CoreError::IntervalOutOfRange {
            start: 0.0,
            end: 12.0,
            duration: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "Interval 0.000s..12.000s is outside the source duration of 5.000s"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io_err.into();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_command_start_error_keeps_command_name() {
        let err = command_start_error(
            "ffmpeg (snippet encode)",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().starts_with("Failed to start 'ffmpeg (snippet encode)'"));
    }
}
