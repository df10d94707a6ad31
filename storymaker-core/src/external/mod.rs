// ============================================================================
// storymaker-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates the external command-line tools that do the
// actual media work. Traits (FfmpegSpawner, FfprobeExecutor) sit in front of
// the concrete ffmpeg-sidecar / ffprobe implementations so the toolkit can be
// driven by mocks in tests.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Builds the ffmpeg invocation for a snippet
pub mod ffmpeg_builder;

/// Traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

/// `MediaToolkit` implementation over ffmpeg/ffprobe
pub mod toolkit;

/// Test doubles for the executors
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_builder::build_snippet_command;
pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
pub use ffprobe_executor::{CrateFfprobeExecutor, FfprobeExecutor};
pub use toolkit::{FfmpegSource, FfmpegToolkit};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs `cmd_name -version` with all output discarded.
///
/// # Returns
///
/// * `Ok(())` - The command started and exited successfully
/// * `Err(CoreError::DependencyNotFound)` - The command is not on `PATH`
/// * `Err(CoreError::CommandStart)` - The command exists but could not be started
/// * `Err(CoreError::CommandFailed)` - The command ran but reported failure
///
/// # Examples
///
/// ```rust,no_run
/// use storymaker_core::external::check_dependency;
///
/// check_dependency("ffmpeg").expect("ffmpeg must be installed");
/// ```
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    log::debug!("Checking for dependency: {}", cmd_name);
    let status = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => {
            log::debug!("Dependency '{}' found.", cmd_name);
            Ok(())
        }
        Ok(status) => {
            log::warn!("Dependency '{}' exited with {}", cmd_name, status);
            Err(crate::error::command_failed_error(
                cmd_name,
                status,
                "version check failed",
            ))
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", cmd_name);
                Err(CoreError::DependencyNotFound(cmd_name.to_string()))
            } else {
                log::error!(
                    "Failed to start dependency check command '{}': {}",
                    cmd_name,
                    e
                );
                Err(CoreError::CommandStart(cmd_name.to_string(), e))
            }
        }
    }
}
