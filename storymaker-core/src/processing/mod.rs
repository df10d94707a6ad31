//! Snippet processing logic and orchestration.
//!
//! The pure decisions (interval sampling, crop geometry, output naming) live
//! in their own submodules so they can be tested without a media toolkit;
//! `extract` strings them together into the pipeline.

/// Random snippet interval selection
pub mod interval;

/// Centered, even-aligned crop geometry
pub mod crop;

/// Snippet output file naming
pub mod output_path;

/// The snippet extraction pipeline
pub mod extract;

pub use crop::{CropRect, compute_center_crop};
pub use extract::{SnippetExtractor, SnippetResult, extract_snippets};
pub use interval::{SnippetInterval, sample_interval};
pub use output_path::{snippet_file_name, snippet_output_path};
