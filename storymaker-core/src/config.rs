// ============================================================================
// storymaker-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Snippet Run Configuration and Defaults
//
// This module defines the configuration structures and constants used by the
// snippet pipeline. The defaults reproduce the classic behavior: three 10-20
// second snippets cropped to 9:16 and written as H.264/AAC .mov files into
// ./output_videos.
//
// KEY COMPONENTS:
// - AspectRatio: Target width:height ratio for the crop
// - CodecOptions: Fixed encoder settings handed to the media toolkit
// - SnippetConfig: Everything a single run needs

use crate::error::{CoreError, CoreResult};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Folder the snippets are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "./output_videos";

/// Vertical 9:16, the format used by short-form video platforms.
pub const DEFAULT_ASPECT_RATIO: AspectRatio = AspectRatio { width: 9, height: 16 };

/// Number of snippets written per run.
pub const DEFAULT_SNIPPET_COUNT: usize = 3;

/// Shortest snippet, in whole seconds.
pub const DEFAULT_MIN_SNIPPET_SECS: u32 = 10;

/// Longest snippet, in whole seconds.
pub const DEFAULT_MAX_SNIPPET_SECS: u32 = 20;

// ============================================================================
// ASPECT RATIO
// ============================================================================

/// Target aspect ratio as a pair of positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// Creates a ratio, rejecting zero components.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::Config(format!(
                "Aspect ratio components must be positive, got {width}:{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        DEFAULT_ASPECT_RATIO
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = CoreError;

    /// Parses `W:H` or `WxH` (e.g. `9:16`, `4x5`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (w, h) = trimmed
            .split_once(':')
            .or_else(|| trimmed.split_once(['x', 'X']))
            .ok_or_else(|| {
                CoreError::Config(format!(
                    "Invalid aspect ratio '{s}', expected W:H (e.g. 9:16)"
                ))
            })?;

        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|_| {
                CoreError::Config(format!(
                    "Invalid aspect ratio '{s}', components must be integers"
                ))
            })
        };

        AspectRatio::new(parse(w)?, parse(h)?)
    }
}

// ============================================================================
// CODEC OPTIONS
// ============================================================================

/// Encoder settings used for every snippet.
///
/// `yuv420p` subsamples chroma 4:2:0, which is why crop rectangles are always
/// aligned to even dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    pub video_codec: String,
    pub audio_codec: String,
    pub preset: String,
    pub pixel_format: String,
    /// Container extension for the output files, without the dot.
    pub container: String,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            preset: "medium".to_string(),
            pixel_format: "yuv420p".to_string(),
            container: "mov".to_string(),
        }
    }
}

// ============================================================================
// SNIPPET CONFIGURATION
// ============================================================================

/// Configuration for a single extraction run.
///
/// # Examples
///
/// ```rust
/// use storymaker_core::SnippetConfig;
/// use std::path::PathBuf;
///
/// let mut config = SnippetConfig::new(PathBuf::from("/tmp/snippets"));
/// config.snippet_count = 5;
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SnippetConfig {
    /// Directory the snippets are written to; created if missing
    pub output_dir: PathBuf,

    /// Target aspect ratio of every snippet
    pub aspect_ratio: AspectRatio,

    /// Number of snippets to write
    pub snippet_count: usize,

    /// Inclusive lower bound of the sampled snippet length, in seconds
    pub min_snippet_secs: u32,

    /// Inclusive upper bound of the sampled snippet length, in seconds
    pub max_snippet_secs: u32,

    pub codec: CodecOptions,
}

impl SnippetConfig {
    /// Creates a configuration with default parameters writing to `output_dir`.
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            snippet_count: DEFAULT_SNIPPET_COUNT,
            min_snippet_secs: DEFAULT_MIN_SNIPPET_SECS,
            max_snippet_secs: DEFAULT_MAX_SNIPPET_SECS,
            codec: CodecOptions::default(),
        }
    }

    /// Checks the parameters for internal consistency.
    pub fn validate(&self) -> CoreResult<()> {
        if self.snippet_count == 0 {
            return Err(CoreError::Config(
                "Snippet count must be at least 1".to_string(),
            ));
        }
        if self.min_snippet_secs == 0 {
            return Err(CoreError::Config(
                "Minimum snippet duration must be at least 1 second".to_string(),
            ));
        }
        if self.min_snippet_secs > self.max_snippet_secs {
            return Err(CoreError::Config(format!(
                "Minimum snippet duration ({}s) exceeds maximum ({}s)",
                self.min_snippet_secs, self.max_snippet_secs
            )));
        }
        if self.aspect_ratio.width == 0 || self.aspect_ratio.height == 0 {
            return Err(CoreError::Config(format!(
                "Aspect ratio components must be positive, got {}:{}",
                self.aspect_ratio.width, self.aspect_ratio.height
            )));
        }
        if self.codec.container.is_empty() {
            return Err(CoreError::Config(
                "Output container extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
