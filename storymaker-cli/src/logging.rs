// ============================================================================
// storymaker-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Backend for the `log` Facade
//
// The core library only emits `log` records; this module installs the
// backend. Default level is `info`, `--verbose` raises it to `debug`, and
// RUST_LOG (if set) overrides both:
// - RUST_LOG=debug: ffmpeg command lines and per-snippet sizes
// - RUST_LOG=trace: encoder progress

use console::style;
use log::LevelFilter;
use std::io::Write;

/// Level used when RUST_LOG is not set.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger. Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let level = default_level(verbose);
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => style("ERROR").for_stderr().red().bold(),
                log::Level::Warn => style("WARN ").for_stderr().yellow(),
                log::Level::Info => style("INFO ").for_stderr().green(),
                log::Level::Debug => style("DEBUG").for_stderr().blue(),
                log::Level::Trace => style("TRACE").for_stderr().magenta(),
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level, record.args())
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with default level {}", level);
    }
}

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
///
/// ```
/// let stamp = storymaker_cli::logging::get_timestamp();
/// assert_eq!(stamp.len(), 19);
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
