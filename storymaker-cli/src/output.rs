// storymaker-cli/src/output.rs
//
// Human-readable run header and summary printed to stdout.

use console::style;
use std::path::Path;
use std::time::Duration;
use storymaker_core::utils::get_filename_safe;
use storymaker_core::{SnippetConfig, SnippetResult, format_bytes, format_duration};

use crate::logging::get_timestamp;

/// Prints what the run is about to do.
pub fn print_run_header(input: &Path, config: &SnippetConfig, seed: Option<u64>) {
    println!("{}", style("===== Storymaker =====").bold());
    print_info("Started", get_timestamp());
    print_info("Input", input.display());
    print_info("Output", config.output_dir.display());
    print_info(
        "Snippets",
        format!(
            "{} x {}-{}s at {}",
            config.snippet_count,
            config.min_snippet_secs,
            config.max_snippet_secs,
            config.aspect_ratio
        ),
    );
    if let Some(seed) = seed {
        print_info("Seed", seed);
    }
    println!();
}

/// Prints one line per written snippet and the totals.
pub fn print_summary(results: &[SnippetResult], elapsed: Duration) {
    for snippet in results {
        println!(
            "  {} {} ({}, {} from {}, crop {})",
            style("✓").green().bold(),
            snippet_label(&snippet.output_path),
            format_bytes(snippet.output_size),
            format_duration(snippet.interval.duration_secs),
            format_duration(snippet.interval.start_secs),
            snippet.crop
        );
    }

    let total: u64 = results.iter().map(|r| r.output_size).sum();
    println!();
    print_info(
        "Finished",
        format!(
            "{} snippet(s), {} in {}",
            results.len(),
            format_bytes(total),
            format_duration(elapsed.as_secs_f64())
        ),
    );
}

/// File name of a snippet; the directory is already shown in the header.
fn snippet_label(path: &Path) -> String {
    get_filename_safe(path).unwrap_or_else(|_| path.display().to_string())
}

/// Prints a failure to stderr.
pub fn print_error(message: impl std::fmt::Display) {
    eprintln!("{} {}", style("Error:").for_stderr().red().bold(), message);
}

fn print_info(label: &str, value: impl std::fmt::Display) {
    println!("{:<9} {}", style(format!("{label}:")).cyan(), value);
}
