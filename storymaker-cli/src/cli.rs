// storymaker-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;
use storymaker_core::AspectRatio;
use storymaker_core::config::{
    DEFAULT_MAX_SNIPPET_SECS, DEFAULT_MIN_SNIPPET_SECS, DEFAULT_OUTPUT_DIR,
};

use crate::config::{DEFAULT_ASPECT_RATIO_ARG, DEFAULT_COUNT_ARG};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "storymaker",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Storymaker: random vertical snippets from a video",
    long_about = "Cuts randomly timed 10-20 second snippets out of a video, crops them \
                  around the center to a vertical aspect ratio and encodes them with \
                  ffmpeg (H.264/AAC) into numbered .mov files."
)]
pub struct Cli {
    /// Video file to cut snippets from
    #[arg(value_name = "INPUT_VIDEO")]
    pub input_video: PathBuf,

    /// Directory where snippets are written (created if missing)
    #[arg(short = 'o', long = "output-dir", value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Target aspect ratio as W:H
    #[arg(short = 'a', long = "aspect-ratio", value_name = "W:H", default_value = DEFAULT_ASPECT_RATIO_ARG)]
    pub aspect_ratio: AspectRatio,

    /// Number of snippets to write
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        default_value = DEFAULT_COUNT_ARG,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Shortest snippet length in whole seconds
    #[arg(
        long = "min-duration",
        value_name = "SECS",
        default_value_t = DEFAULT_MIN_SNIPPET_SECS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub min_duration: u32,

    /// Longest snippet length in whole seconds
    #[arg(
        long = "max-duration",
        value_name = "SECS",
        default_value_t = DEFAULT_MAX_SNIPPET_SECS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_duration: u32,

    /// Seed for the random interval choice; repeat a run by reusing its seed.
    /// Can also be set via the STORYMAKER_SEED environment variable.
    #[arg(long, value_name = "SEED", env = "STORYMAKER_SEED")]
    pub seed: Option<u64>,

    /// Enable debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["storymaker", "clip.mp4"]).unwrap();
        assert_eq!(cli.input_video, PathBuf::from("clip.mp4"));
        assert_eq!(cli.output_dir, PathBuf::from("./output_videos"));
        assert_eq!(cli.aspect_ratio, AspectRatio { width: 9, height: 16 });
        assert_eq!(cli.count, 3);
        assert_eq!(cli.min_duration, 10);
        assert_eq!(cli.max_duration, 20);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "storymaker",
            "-o",
            "reels",
            "-a",
            "4:5",
            "-n",
            "6",
            "--min-duration",
            "5",
            "--max-duration",
            "8",
            "--seed",
            "42",
            "-v",
            "holiday.mov",
        ])
        .unwrap();
        assert_eq!(cli.input_video, PathBuf::from("holiday.mov"));
        assert_eq!(cli.output_dir, PathBuf::from("reels"));
        assert_eq!(cli.aspect_ratio, AspectRatio { width: 4, height: 5 });
        assert_eq!(cli.count, 6);
        assert_eq!(cli.min_duration, 5);
        assert_eq!(cli.max_duration, 8);
        assert_eq!(cli.seed, Some(42));
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = Cli::try_parse_from(["storymaker"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let err = Cli::try_parse_from(["storymaker", "-n", "0", "clip.mp4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_bad_aspect_ratio_is_rejected() {
        let err = Cli::try_parse_from(["storymaker", "-a", "tall", "clip.mp4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["storymaker", "a.mp4", "b.mp4"]).is_err());
    }
}
