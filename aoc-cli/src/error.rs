//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Fatal CLI errors; per-solver failures are reported per result instead.
#[derive(Error, Debug)]
pub enum CliError {
    /// Plugin registration failed while building the registry
    #[error("registration error: {0}")]
    Registration(#[from] aoc_core::RegistrationError),
}

/// Errors loading puzzle input files
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file at the expected location
    #[error("no puzzle input for {year}/day{day:02} (expected {})", .path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// The input file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
