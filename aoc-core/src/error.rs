//! Error types for the solver framework

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match the expected structure
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from the input
    #[error("missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented by the solver
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is 0 or exceeds the solver's `PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The computation itself failed
    #[error("solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry-level solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Error occurred while parsing the input
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred while solving a part
    #[error("solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for plugin registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year-day combination
    #[error("duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// The year-day combination is outside the Advent of Code calendar
    #[error("year {0} day {1} is outside the Advent of Code calendar")]
    OutOfCalendar(u16, u8),
}
