// ============================================================================
// storymaker-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// One ffmpeg process per snippet. `FfmpegSpawner` starts the encode and
// `FfmpegProcess` streams its events and reports the exit status. The
// production pair wraps ffmpeg-sidecar and tags every error with the snippet
// file it was writing; tests substitute the mock spawner.

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Error context for a snippet encode, e.g. `ffmpeg (snippet encode out/clip__9x16__01.mov)`.
fn encode_context(output: &str) -> String {
    format!("ffmpeg (snippet encode {output})")
}

/// Running snippet encode backed by `ffmpeg_sidecar::child::FfmpegChild`.
pub struct SidecarProcess {
    child: SidecarChild,
    output: String,
}

impl SidecarProcess {
    /// Output file this process is writing, as shown in errors and logs.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let events = self.child.iter().map_err(|e| {
            log::error!("No event stream from ffmpeg writing {}: {}", self.output, e);
            command_failed_error(
                encode_context(&self.output),
                ExitStatus::default(),
                format!("could not read encoder output: {e}"),
            )
        })?;
        for event in events {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.child
            .wait()
            .map_err(|e| command_wait_error(encode_context(&self.output), e))
    }
}

/// Spawns snippet encodes through `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        // The snippet path is always the last argument.
        let output = cmd
            .get_args()
            .last()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("Spawning ffmpeg for {}", output);

        match cmd.spawn() {
            Ok(child) => Ok(SidecarProcess { child, output }),
            Err(e) => Err(command_start_error(encode_context(&output), e)),
        }
    }
}
