//! Solver instances and the type-erased runner interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result of solving one puzzle part, with timing
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The answer, rendered as a string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveReport {
    /// Time spent solving
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver bound to one year-day problem and one parsed input.
///
/// Created by parsing the input exactly once; parts then run against the
/// shared parsed data. Parse timing is recorded at construction.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and create an instance for the given year and day.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface over any [`SolverInstance`].
///
/// Lets the registry and runners treat all day solvers uniformly through
/// dynamic dispatch.
///
/// # Example
///
/// ```no_run
/// use aoc_core::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let report = solver.solve(part)?;
///         println!("part {part}: {} ({:?})", report.answer, report.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the given part, timing the computation.
    fn solve(&mut self, part: u8) -> Result<SolveReport, SolveError>;

    /// The Advent of Code year this instance solves
    fn year(&self) -> u16;

    /// The day number this instance solves
    fn day(&self) -> u8;

    /// Number of parts the underlying solver implements
    fn parts(&self) -> u8;

    /// Time spent parsing the input at construction
    fn parse_duration(&self) -> TimeDelta;
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveReport, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveReport {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }
}
