//! Command implementations for the CLI.

/// Module containing the snippet extraction run.
pub mod extract;
