//! Advent of Code Solver Framework
//!
//! A small trait-based framework for organizing Advent of Code day solvers.
//! Each day implements input parsing and per-part solving against its own
//! parsed data type; a registry collects the days (via `inventory` plugins)
//! and runs them uniformly through a type-erased instance.
//!
//! # Overview
//!
//! - [`AocParser`] / [`Solver`] — parsing and per-part solving for one day
//! - [`SolverInstance`] / [`DynSolver`] — one parsed input plus timing,
//!   behind an object-safe interface
//! - [`SolverPlugin`] / [`RegistryBuilder`] / [`SolverRegistry`] — automatic
//!   registration and (year, day) lookup
//!
//! # Quick Example
//!
//! ```
//! use aoc_core::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! struct Totals;
//!
//! impl AocParser for Totals {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| {
//!                 l.trim()
//!                     .parse()
//!                     .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {l:?}")))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Totals {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i64>().to_string()),
//!             p => Err(SolveError::PartNotImplemented(p)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(2023, 1, &Totals, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! let report = solver.solve(1).unwrap();
//! assert_eq!(report.answer, "6");
//! ```
//!
//! # Registering a day
//!
//! Day modules submit a plugin; binaries build the registry from whatever
//! got linked in:
//!
//! ```ignore
//! inventory::submit! {
//!     SolverPlugin { year: 2023, day: 1, solver: &Solver, tags: &["2023"] }
//! }
//!
//! let registry = RegistryBuilder::new().register_all_plugins()?.build();
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveReport, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, FIRST_YEAR, RegisterableSolver, RegistryBuilder, SolverInfo, SolverPlugin,
    SolverRegistry,
};
pub use solver::{AocParser, Solver, SolverExt};

// Re-export inventory so downstream crates can `submit!` plugins without
// pinning the crate themselves.
pub use inventory;
