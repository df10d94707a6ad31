// storymaker-cli/src/main.rs
//
// Entry point for the `storymaker` binary.
//
// Parses the arguments, installs logging, runs one extraction and maps the
// outcome to the process exit code: 0 when every snippet was written, 1 on
// a usage error or any failure.

use clap::Parser;
use clap::error::ErrorKind;
use std::process;
use storymaker_cli::{Cli, logging, output, run_extract};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // clap's rendering ends with the usage line
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    logging::init(cli.verbose);

    if let Err(e) = run_extract(&cli) {
        log::debug!("Run failed: {:?}", e);
        output::print_error(&e);
        process::exit(1);
    }
}
