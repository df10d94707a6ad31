//! FFmpeg command construction.
//!
//! Builds the ffmpeg invocation that renders one snippet: seek, duration,
//! crop filter, and the codec options from `CodecOptions`. Paths are passed
//! as `OsStr`, so file names that are not valid UTF-8 reach ffmpeg intact.

use crate::config::CodecOptions;
use crate::media::Clip;
use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::Path;

/// Builds the ffmpeg command that encodes `clip` into `output_path`.
///
/// `-ss` is placed before the input so ffmpeg seeks on the demuxer, which
/// keeps long sources fast while still cutting frame-accurately when
/// re-encoding.
#[must_use]
pub fn build_snippet_command(clip: &Clip, output_path: &Path, codec: &CodecOptions) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.hide_banner().overwrite();

    cmd.args(["-ss", format!("{:.3}", clip.start_secs()).as_str()]);
    cmd.input(clip.source_path());
    cmd.args(["-t", format!("{:.3}", clip.duration_secs()).as_str()]);

    if let Some(rect) = clip.crop_rect() {
        cmd.args(["-vf", rect.to_filter().as_str()]);
    }

    cmd.args(["-c:v", codec.video_codec.as_str()]);
    cmd.args(["-preset", codec.preset.as_str()]);
    cmd.args(["-pix_fmt", codec.pixel_format.as_str()]);
    cmd.args(["-c:a", codec.audio_codec.as_str()]);
    cmd.output(output_path);
    cmd
}
