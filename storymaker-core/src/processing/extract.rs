// ============================================================================
// storymaker-core/src/processing/extract.rs
// ============================================================================
//
// SNIPPET EXTRACTION: The Main Pipeline
//
// Opens the source once, then for each snippet: samples an interval, cuts and
// crops a clip, and asks the toolkit to encode it. The loop is strictly
// sequential and stops at the first failure; snippets already written stay
// on disk. The source is closed exactly once on every path.

use crate::config::SnippetConfig;
use crate::error::{CoreError, CoreResult};
use crate::media::{Clip, MediaSource, MediaToolkit, SourceGuard};
use crate::processing::crop::{CropRect, compute_center_crop};
use crate::processing::interval::{SnippetInterval, sample_interval};
use crate::processing::output_path::snippet_file_name;
use crate::utils::{format_bytes, get_file_stem_safe};

use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of one written snippet.
#[derive(Debug, Clone)]
pub struct SnippetResult {
    /// 1-based position in the run
    pub index: usize,
    pub output_path: PathBuf,
    pub interval: SnippetInterval,
    pub crop: CropRect,
    pub output_size: u64,
    /// Wall-clock time spent encoding
    pub elapsed: Duration,
}

/// Runs the snippet pipeline for `input_path`.
///
/// Creates `config.output_dir` (with parents) if needed, then writes
/// `config.snippet_count` snippets named after the input stem.
///
/// # Errors
///
/// * `Config` - the configuration is inconsistent
/// * `OutputDirectory` - the output directory could not be created
/// * `InputOpen` - the input could not be opened as a video
/// * `InvalidInput` - the source has no usable duration
/// * `InvalidCrop` - the frame is too small for the target ratio
/// * `Encode` - the toolkit failed to write a snippet, or reported success
///   without leaving a file behind; the run stops there
pub fn extract_snippets<T, R>(
    toolkit: &T,
    config: &SnippetConfig,
    input_path: &Path,
    rng: &mut R,
) -> CoreResult<Vec<SnippetResult>>
where
    T: MediaToolkit,
    R: Rng + ?Sized,
{
    config.validate()?;
    let stem = get_file_stem_safe(input_path)?;

    fs::create_dir_all(&config.output_dir).map_err(|source| {
        log::error!(
            "Failed to create output directory {}: {}",
            config.output_dir.display(),
            source
        );
        CoreError::OutputDirectory {
            path: config.output_dir.clone(),
            source,
        }
    })?;

    let source = SourceGuard::new(toolkit.open(input_path)?);
    let props = source.properties().clone();
    if !props.duration_secs.is_finite() || props.duration_secs <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "{} has no usable duration ({})",
            input_path.display(),
            props.duration_secs
        )));
    }
    log::info!(
        "Source {}: {}x{}, {:.2}s",
        input_path.display(),
        props.width,
        props.height,
        props.duration_secs
    );

    let crop = compute_center_crop(props.width, props.height, config.aspect_ratio)?;
    let full_clip = Clip::from_source(&*source);
    let mut results = Vec::with_capacity(config.snippet_count);

    for index in 1..=config.snippet_count {
        let interval = sample_interval(
            rng,
            props.duration_secs,
            config.min_snippet_secs,
            config.max_snippet_secs,
        )?;
        if interval.clamped {
            log::warn!(
                "Source is shorter than {}s, snippet {} covers the whole {:.2}s",
                config.min_snippet_secs,
                index,
                props.duration_secs
            );
        }

        let clip = full_clip
            .subclip(interval.start_secs, interval.end_secs())?
            .crop(crop)?;

        let output_path = config.output_dir.join(snippet_file_name(
            &stem,
            config.aspect_ratio,
            index,
            &config.codec.container,
        ));

        log::info!(
            "Snippet {}/{}: {:.2}s-{:.2}s, crop {} -> {}",
            index,
            config.snippet_count,
            interval.start_secs,
            interval.end_secs(),
            crop,
            output_path.display()
        );

        let started = Instant::now();
        toolkit
            .write(&clip, &output_path, &config.codec)
            .inspect_err(|e| log::error!("Snippet {} failed: {}", index, e))?;
        let elapsed = started.elapsed();

        let output_size = fs::metadata(&output_path)
            .map(|metadata| metadata.len())
            .map_err(|e| {
                log::error!(
                    "Snippet {} reported success but {} is unreadable: {}",
                    index,
                    output_path.display(),
                    e
                );
                CoreError::Encode {
                    path: output_path.clone(),
                    message: format!("no output file after encode: {e}"),
                }
            })?;
        log::debug!(
            "Wrote {} ({}) in {:.1}s",
            output_path.display(),
            format_bytes(output_size),
            elapsed.as_secs_f64()
        );

        results.push(SnippetResult {
            index,
            output_path,
            interval,
            crop,
            output_size,
            elapsed,
        });
    }

    source.close()?;
    Ok(results)
}

/// A toolkit and a configuration bound together.
///
/// ```rust,no_run
/// use storymaker_core::{FfmpegToolkit, SnippetConfig, SnippetExtractor};
/// use std::path::Path;
///
/// let extractor = SnippetExtractor::new(FfmpegToolkit::new(), SnippetConfig::default());
/// let results = extractor
///     .run(Path::new("holiday.mp4"), &mut rand::thread_rng())
///     .unwrap();
/// assert_eq!(results.len(), 3);
/// ```
pub struct SnippetExtractor<T: MediaToolkit> {
    toolkit: T,
    config: SnippetConfig,
}

impl<T: MediaToolkit> SnippetExtractor<T> {
    pub fn new(toolkit: T, config: SnippetConfig) -> Self {
        Self { toolkit, config }
    }

    pub fn config(&self) -> &SnippetConfig {
        &self.config
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn run<R: Rng + ?Sized>(
        &self,
        input_path: &Path,
        rng: &mut R,
    ) -> CoreResult<Vec<SnippetResult>> {
        extract_snippets(&self.toolkit, &self.config, input_path, rng)
    }
}
