//! Core library for extracting random vertical snippets from a video.
//!
//! A run opens one source video, then repeatedly picks a random 10-20 second
//! interval, crops the frame to the target aspect ratio around its center,
//! and encodes the result with ffmpeg into a numbered `.mov` file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use storymaker_core::{FfmpegToolkit, SnippetConfig, extract_snippets};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::path::{Path, PathBuf};
//!
//! let mut config = SnippetConfig::new(PathBuf::from("/path/to/output"));
//! config.snippet_count = 5;
//! config.validate().unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let results = extract_snippets(
//!     &FfmpegToolkit::new(),
//!     &config,
//!     Path::new("/path/to/input.mp4"),
//!     &mut rng,
//! ).unwrap();
//!
//! for snippet in &results {
//!     println!("{}", snippet.output_path.display());
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod media;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{AspectRatio, CodecOptions, SnippetConfig};
pub use error::{CoreError, CoreResult};
pub use external::{FfmpegToolkit, check_dependency};
pub use media::{Clip, MediaSource, MediaToolkit, SourceGuard, VideoProperties};
pub use processing::{
    CropRect, SnippetExtractor, SnippetInterval, SnippetResult, compute_center_crop,
    extract_snippets, sample_interval, snippet_file_name,
};
pub use utils::{format_bytes, format_duration, parse_ffmpeg_time};
