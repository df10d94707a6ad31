// storymaker-cli/src/config.rs
//
// Default argument values for the `storymaker` binary that clap needs as
// strings. Numeric defaults come straight from storymaker-core.

pub const DEFAULT_ASPECT_RATIO_ARG: &str = "9:16";
pub const DEFAULT_COUNT_ARG: &str = "3";
