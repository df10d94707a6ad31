// ============================================================================
// storymaker-core/src/external/toolkit.rs
// ============================================================================
//
// FFMPEG TOOLKIT: MediaToolkit Implementation over ffmpeg/ffprobe
//
// `open` checks that the input is a readable file, keeps a handle to it for
// the lifetime of the source and probes it with ffprobe. `write` turns a
// `Clip` into one ffmpeg invocation and maps any failure to
// `CoreError::Encode`.

use crate::config::CodecOptions;
use crate::error::{CoreError, CoreResult};
use crate::external::ffmpeg_builder::build_snippet_command;
use crate::external::ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarSpawner};
use crate::external::ffprobe_executor::{CrateFfprobeExecutor, FfprobeExecutor};
use crate::media::{Clip, MediaSource, MediaToolkit, VideoProperties};
use crate::utils::parse_ffmpeg_time;

use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Source opened by `FfmpegToolkit`.
#[derive(Debug)]
pub struct FfmpegSource {
    path: PathBuf,
    properties: VideoProperties,
    handle: Option<File>,
}

impl MediaSource for FfmpegSource {
    fn path(&self) -> &Path {
        &self.path
    }

    fn properties(&self) -> &VideoProperties {
        &self.properties
    }

    fn close(&mut self) -> CoreResult<()> {
        if self.handle.take().is_none() {
            log::warn!("Source {} was already closed", self.path.display());
        }
        Ok(())
    }
}

/// `MediaToolkit` backed by the ffmpeg and ffprobe executables.
#[derive(Debug, Clone, Default)]
pub struct FfmpegToolkit<S = SidecarSpawner, P = CrateFfprobeExecutor> {
    spawner: S,
    prober: P,
}

impl FfmpegToolkit {
    /// Toolkit using the system `ffmpeg`/`ffprobe`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, P> FfmpegToolkit<S, P>
where
    S: FfmpegSpawner,
    P: FfprobeExecutor,
{
    pub fn with_executors(spawner: S, prober: P) -> Self {
        Self { spawner, prober }
    }
}

impl<S, P> MediaToolkit for FfmpegToolkit<S, P>
where
    S: FfmpegSpawner,
    P: FfprobeExecutor,
{
    type Source = FfmpegSource;

    fn open(&self, path: &Path) -> CoreResult<FfmpegSource> {
        let input_open = |source: io::Error| CoreError::InputOpen {
            path: path.to_path_buf(),
            source,
        };

        let handle = File::open(path).map_err(input_open)?;
        let metadata = handle.metadata().map_err(input_open)?;
        if !metadata.is_file() {
            return Err(input_open(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let properties = self.prober.get_video_properties(path)?;
        log::debug!(
            "Opened {}: {}x{}, {:.3}s",
            path.display(),
            properties.width,
            properties.height,
            properties.duration_secs
        );

        Ok(FfmpegSource {
            path: path.to_path_buf(),
            properties,
            handle: Some(handle),
        })
    }

    fn write(&self, clip: &Clip, output_path: &Path, codec: &CodecOptions) -> CoreResult<()> {
        let encode_error = |message: String| CoreError::Encode {
            path: output_path.to_path_buf(),
            message,
        };

        let cmd = build_snippet_command(clip, output_path, codec);
        log::debug!("Running snippet encode command: {:?}", cmd);

        let mut process = self
            .spawner
            .spawn(cmd)
            .map_err(|e| encode_error(e.to_string()))?;

        let total_secs = clip.duration_secs();
        let mut last_error: Option<String> = None;
        process
            .handle_events(|event| {
                match event {
                    FfmpegEvent::Error(message) => {
                        log::debug!("ffmpeg error: {}", message);
                        last_error = Some(message);
                    }
                    FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                        log::debug!("ffmpeg: {}", line);
                        last_error = Some(line);
                    }
                    FfmpegEvent::Progress(progress) => {
                        if let Some(done) = parse_ffmpeg_time(&progress.time) {
                            log::trace!(
                                "Encoding {}: {:.1}s / {:.1}s",
                                output_path.display(),
                                done,
                                total_secs
                            );
                        }
                    }
                    _ => {}
                }
                Ok(())
            })
            .map_err(|e| encode_error(e.to_string()))?;

        let status = process.wait().map_err(|e| encode_error(e.to_string()))?;
        if !status.success() {
            let message = match last_error {
                Some(line) => format!("ffmpeg exited with {status}: {line}"),
                None => format!("ffmpeg exited with {status}"),
            };
            log::error!("Snippet encode failed for {}: {}", output_path.display(), message);
            return Err(encode_error(message));
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::external::mocks::{MockFfmpegSpawner, MockFfprobeExecutor};
    use crate::processing::crop::CropRect;
    use std::fs;
    use tempfile::tempdir;

    fn props() -> VideoProperties {
        VideoProperties {
            width: 1920,
            height: 1080,
            duration_secs: 30.0,
        }
    }

    #[test]
    fn test_open_reads_properties_and_close_releases_handle() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("clip.mp4");
        fs::write(&input, b"dummy").unwrap();

        let toolkit = FfmpegToolkit::with_executors(
            MockFfmpegSpawner::new(),
            MockFfprobeExecutor::new(props()),
        );
        let mut source = toolkit.open(&input).unwrap();
        assert_eq!(source.properties(), &props());
        assert_eq!(source.path(), input.as_path());
        assert!(source.handle.is_some());

        source.close().unwrap();
        assert!(source.handle.is_none());
    }

    #[test]
    fn test_open_missing_input_is_input_open_error() {
        let dir = tempdir().unwrap();
        let toolkit = FfmpegToolkit::with_executors(
            MockFfmpegSpawner::new(),
            MockFfprobeExecutor::new(props()),
        );
        let err = toolkit.open(&dir.path().join("missing.mp4")).unwrap_err();
        assert!(matches!(err, CoreError::InputOpen { .. }));
    }

    #[test]
    fn test_open_propagates_probe_failure() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, b"not a video").unwrap();

        let toolkit = FfmpegToolkit::with_executors(
            MockFfmpegSpawner::new(),
            MockFfprobeExecutor::failing("No video stream found"),
        );
        let err = toolkit.open(&input).unwrap_err();
        assert!(matches!(err, CoreError::VideoInfoError(_)));
    }

    #[test]
    fn test_write_runs_encoder_with_crop() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("clip.mp4");
        fs::write(&input, b"dummy").unwrap();
        let output = dir.path().join("clip__9x16__01.mov");

        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation("crop=606:1080:656:0", Vec::new(), true);
        let toolkit = FfmpegToolkit::with_executors(spawner.clone(), MockFfprobeExecutor::new(props()));

        let source = toolkit.open(&input).unwrap();
        let clip = Clip::from_source(&source)
            .subclip(3.0, 15.0)
            .unwrap()
            .crop(CropRect { x1: 656, y1: 0, x2: 1262, y2: 1080 })
            .unwrap();
        toolkit.write(&clip, &output, &CodecOptions::default()).unwrap();

        assert!(output.exists());
        let calls = spawner.get_received_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].iter().any(|a| a == "libx264"));
        assert!(calls[0].iter().any(|a| a == "yuv420p"));
    }

    #[test]
    fn test_failed_encode_reports_last_error_line() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("clip.mp4");
        fs::write(&input, b"dummy").unwrap();
        let output = dir.path().join("clip__9x16__01.mov");

        let spawner = MockFfmpegSpawner::new();
        spawner.add_exit_error_expectation(
            "libx264",
            vec![FfmpegEvent::Log(
                LogLevel::Error,
                "Unknown encoder 'libx264'".to_string(),
            )],
            1,
        );
        let toolkit = FfmpegToolkit::with_executors(spawner, MockFfprobeExecutor::new(props()));

        let source = toolkit.open(&input).unwrap();
        let clip = Clip::from_source(&source).subclip(0.0, 10.0).unwrap();
        let err = toolkit.write(&clip, &output, &CodecOptions::default()).unwrap_err();

        match err {
            CoreError::Encode { path, message } => {
                assert_eq!(path, output);
                assert!(message.contains("Unknown encoder 'libx264'"));
            }
            other => panic!("expected encode error, got {other:?}"),
        }
    }

    #[test]
    fn test_spawn_failure_is_encode_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("clip.mp4");
        fs::write(&input, b"dummy").unwrap();

        let spawner = MockFfmpegSpawner::new();
        spawner.add_spawn_error_expectation(
            "-c:v",
            CoreError::DependencyNotFound("ffmpeg".to_string()),
        );
        let toolkit = FfmpegToolkit::with_executors(spawner, MockFfprobeExecutor::new(props()));

        let source = toolkit.open(&input).unwrap();
        let clip = Clip::from_source(&source);
        let err = toolkit
            .write(&clip, &dir.path().join("out.mov"), &CodecOptions::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::Encode { .. }));
    }
}
