//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into the data a solver works on.
///
/// Splitting parsing from solving keeps each day's parts pure functions of
/// the same parsed input.
///
/// # Example
///
/// ```
/// use aoc_core::{AocParser, ParseError};
///
/// struct Totals;
///
/// impl AocParser for Totals {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| {
///                 l.trim()
///                     .parse()
///                     .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {l:?}")))
///             })
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The data structure holding the parsed input.
    ///
    /// Any ownership strategy works:
    /// - owned structs or `Vec<T>` when parsing transforms the text
    /// - types borrowing from the input (`Vec<&'a str>`, `&'a str`) for
    ///   zero-copy parsing
    type SharedData<'a>;

    /// Parse the raw input text.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Core trait every day solver implements.
///
/// A solver declares how many parts it has and computes any of them from the
/// shared parsed data. Parts must be independently derivable: solving part 2
/// may not require part 1 to have run first.
///
/// # Example
///
/// ```
/// use aoc_core::{AocParser, ParseError, SolveError, Solver};
///
/// struct Totals;
///
/// impl AocParser for Totals {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| {
///                 l.trim()
///                     .parse()
///                     .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {l:?}")))
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for Totals {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             p => Err(SolveError::PartNotImplemented(p)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve one part of the puzzle.
    ///
    /// `shared` is mutable so solvers may reuse scratch space across parts,
    /// but an answer must never depend on which parts ran before.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, blanket-implemented for every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects part numbers outside
    /// `1..=PARTS` with [`SolveError::PartOutOfRange`].
    fn solve_part_checked(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
