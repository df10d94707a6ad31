//! FFprobe integration for reading source video properties.
//!
//! The toolkit only needs the duration and frame size of the input, which
//! ffprobe reports in the format section and the first video stream.
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::media::VideoProperties;
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Reads video properties of a media file.
pub trait FfprobeExecutor {
    fn get_video_properties(&self, input_path: &Path) -> CoreResult<VideoProperties>;
}

/// `FfprobeExecutor` backed by the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl FfprobeExecutor for CrateFfprobeExecutor {
    fn get_video_properties(&self, input_path: &Path) -> CoreResult<VideoProperties> {
        log::debug!(
            "Running ffprobe (via crate) for video properties on: {}",
            input_path.display()
        );
        match ffprobe(input_path) {
            Ok(metadata) => {
                let duration_secs = metadata
                    .format
                    .duration
                    .as_deref()
                    .and_then(|d| d.parse::<f64>().ok())
                    .ok_or_else(|| {
                        CoreError::FfprobeParse(format!(
                            "Failed to parse duration from format for {}",
                            input_path.display()
                        ))
                    })?;

                let video_stream = metadata
                    .streams
                    .iter()
                    .find(|s| s.codec_type.as_deref() == Some("video"))
                    .ok_or_else(|| {
                        CoreError::VideoInfoError(format!(
                            "No video stream found in {}",
                            input_path.display()
                        ))
                    })?;

                let width = video_stream.width.ok_or_else(|| {
                    CoreError::VideoInfoError(format!(
                        "Video stream missing width in {}",
                        input_path.display()
                    ))
                })?;
                let height = video_stream.height.ok_or_else(|| {
                    CoreError::VideoInfoError(format!(
                        "Video stream missing height in {}",
                        input_path.display()
                    ))
                })?;

                validate_dimensions(input_path, width, height)?;

                Ok(VideoProperties {
                    width: width as u32,
                    height: height as u32,
                    duration_secs,
                })
            }
            Err(err) => {
                log::error!(
                    "ffprobe failed for video properties on {}: {:?}",
                    input_path.display(),
                    err
                );
                Err(map_ffprobe_error(err, "video properties"))
            }
        }
    }
}

fn validate_dimensions(input_path: &Path, width: i64, height: i64) -> CoreResult<()> {
    let in_range = |v: i64| v > 0 && v <= i64::from(u32::MAX);
    if !in_range(width) || !in_range(height) {
        return Err(CoreError::VideoInfoError(format!(
            "Invalid dimensions found in {}: width={}, height={}",
            input_path.display(),
            width,
            height
        )));
    }
    Ok(())
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::JsonParseError(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}
