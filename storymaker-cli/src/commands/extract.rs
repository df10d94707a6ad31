//! Implementation of the snippet extraction run.
//!
//! Turns the parsed arguments into a `SnippetConfig`, checks the input and
//! the external tools, and hands over to `storymaker_core::extract_snippets`.

use crate::cli::Cli;
use crate::output;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;
use storymaker_core::{
    CoreError, CoreResult, FfmpegToolkit, SnippetConfig, SnippetResult, check_dependency,
    extract_snippets,
};

use log::{debug, info};

/// Builds and validates the core configuration from the CLI arguments.
pub fn build_config(args: &Cli) -> CoreResult<SnippetConfig> {
    let mut config = SnippetConfig::new(args.output_dir.clone());
    config.aspect_ratio = args.aspect_ratio;
    config.snippet_count = args.count as usize;
    config.min_snippet_secs = args.min_duration;
    config.max_snippet_secs = args.max_duration;
    config.validate()?;
    Ok(config)
}

/// Seeded generator when `seed` is given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Fails with `InputOpen` unless `path` is an existing regular file.
fn ensure_input_file(path: &Path) -> CoreResult<()> {
    let metadata = fs::metadata(path).map_err(|source| CoreError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(CoreError::InputOpen {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }
    Ok(())
}

/// Runs one extraction and prints the summary.
pub fn run_extract(args: &Cli) -> CoreResult<Vec<SnippetResult>> {
    let config = build_config(args)?;
    ensure_input_file(&args.input_video)?;

    check_dependency("ffmpeg")?;
    check_dependency("ffprobe")?;

    output::print_run_header(&args.input_video, &config, args.seed);

    let started = Instant::now();
    let mut rng = make_rng(args.seed);
    let results = extract_snippets(&FfmpegToolkit::new(), &config, &args.input_video, &mut rng)?;

    info!(
        "Wrote {} snippet(s) to {}",
        results.len(),
        config.output_dir.display()
    );
    output::print_summary(&results, started.elapsed());
    Ok(results)
}
