// storymaker-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.
#![cfg(all(unix, any(test, feature = "test-mocks")))]

use crate::error::{CoreError, CoreResult};
use crate::external::ffmpeg_executor::{FfmpegProcess, FfmpegSpawner};
use crate::external::ffprobe_executor::FfprobeExecutor;
use crate::media::VideoProperties;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::cell::RefCell;
use std::ffi::OsStr;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

/// Mock implementation of FfmpegProcess.
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Vec<FfmpegEvent>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in std::mem::take(&mut self.events_to_emit) {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// Represents an expected ffmpeg command call and its mock result.
pub struct MockFfmpegExpectation {
    pub arg_pattern: String,
    pub result: CoreResult<MockFfmpegProcess>,
    pub create_dummy_output: bool,
}

/// Mock implementation of FfmpegSpawner supporting multiple expectations.
///
/// Each spawn consumes the first expectation whose pattern occurs in the
/// space-joined argument list.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    expectations: Rc<RefCell<Vec<MockFfmpegExpectation>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(
        &self,
        arg_pattern: &str,
        result: CoreResult<MockFfmpegProcess>,
        create_dummy_output: bool,
    ) {
        self.expectations.borrow_mut().push(MockFfmpegExpectation {
            arg_pattern: arg_pattern.to_string(),
            result,
            create_dummy_output,
        });
    }

    pub fn add_success_expectation(
        &self,
        arg_pattern: &str,
        events: Vec<FfmpegEvent>,
        create_dummy_output: bool,
    ) {
        let process = MockFfmpegProcess {
            events_to_emit: events,
            exit_status: ExitStatus::from_raw(0),
        };
        self.add_expectation(arg_pattern, Ok(process), create_dummy_output);
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, error: CoreError) {
        self.add_expectation(arg_pattern, Err(error), false);
    }

    pub fn add_exit_error_expectation(
        &self,
        arg_pattern: &str,
        events: Vec<FfmpegEvent>,
        exit_code: i32,
    ) {
        let process = MockFfmpegProcess {
            events_to_emit: events,
            // wait(2) status layout: exit code in the second byte
            exit_status: ExitStatus::from_raw(exit_code << 8),
        };
        self.add_expectation(arg_pattern, Ok(process), false);
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let output = cmd.get_args().last().map(OsStr::to_os_string);
        let args: Vec<String> = cmd
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let joined = args.join(" ");
        let mut expectations = self.expectations.borrow_mut();
        let position = expectations
            .iter()
            .position(|e| joined.contains(&e.arg_pattern))
            .ok_or_else(|| {
                CoreError::InvalidInput(format!("Unexpected ffmpeg call: {joined}"))
            })?;
        let expectation = expectations.remove(position);

        if expectation.create_dummy_output && expectation.result.is_ok() {
            if let Some(output) = output {
                log::debug!("Mock ffmpeg creating dummy output {:?}", output);
                std::fs::write(output, b"mock snippet")?;
            }
        }

        expectation.result
    }
}

/// Mock implementation of FfprobeExecutor returning fixed properties.
#[derive(Clone, Debug)]
pub struct MockFfprobeExecutor {
    result: Result<VideoProperties, String>,
    probed: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockFfprobeExecutor {
    pub fn new(properties: VideoProperties) -> Self {
        Self {
            result: Ok(properties),
            probed: Rc::default(),
        }
    }

    /// Every probe fails with `VideoInfoError(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            probed: Rc::default(),
        }
    }

    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed.borrow().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn get_video_properties(&self, input_path: &Path) -> CoreResult<VideoProperties> {
        self.probed.borrow_mut().push(input_path.to_path_buf());
        self.result
            .clone()
            .map_err(CoreError::VideoInfoError)
    }
}
