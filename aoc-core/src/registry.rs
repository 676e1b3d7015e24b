//! Plugin collection and the solver registry

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::HashMap;

/// First year of Advent of Code
pub const FIRST_YEAR: u16 = 2015;
/// Days per event (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

fn in_calendar(year: u16, day: u8) -> bool {
    year >= FIRST_YEAR && (1..=DAYS_PER_YEAR).contains(&day)
}

/// Object-safe factory for creating solver instances from input text.
///
/// Blanket-implemented for every [`Solver`], so a `&'static` unit struct is
/// all a day module needs to hand to the plugin system.
pub trait RegisterableSolver: Sync {
    /// Parse `input` and box a solver instance for the given year and day.
    fn make<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

    /// Number of parts the solver implements
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn make<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
        Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A day solver submitted for automatic registration.
///
/// Day modules submit one of these with `inventory::submit!`:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Solver,
///         tags: &["2023", "calibration"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver, type-erased
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering at registration time
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Metadata for one registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts the solver implements
    pub parts: u8,
    /// Tags the solver was registered with
    pub tags: &'static [&'static str],
}

struct Entry {
    solver: &'static dyn RegisterableSolver,
    tags: &'static [&'static str],
}

/// Fluent builder for a [`SolverRegistry`].
///
/// Rejects duplicate year-day registrations and entries outside the Advent
/// of Code calendar; `build()` produces an immutable registry.
///
/// # Example
///
/// ```no_run
/// # use aoc_core::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: HashMap<(u16, u8), Entry>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a single solver for a specific year and day.
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        solver: &'static dyn RegisterableSolver,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError> {
        if !in_calendar(year, day) {
            return Err(RegistrationError::OutOfCalendar(year, day));
        }
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert((year, day), Entry { solver, tags });
        Ok(self)
    }

    /// Register every plugin submitted via `inventory::submit!`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register the submitted plugins matching `filter`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_core::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins_where(|plugin| plugin.year == 2023)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = self.register(plugin.year, plugin.day, plugin.solver, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable [`SolverRegistry`].
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from (year, day) to solver factories.
pub struct SolverRegistry {
    entries: HashMap<(u16, u8), Entry>,
}

impl SolverRegistry {
    /// Parse `input` and create a solver instance for the given year and day.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;
        entry.solver.make(year, day, input).map_err(SolverError::Parse)
    }

    /// Metadata for one registered solver, if present.
    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.entries.get(&(year, day)).map(|e| SolverInfo {
            year,
            day,
            parts: e.solver.parts(),
            tags: e.tags,
        })
    }

    /// Iterate over metadata for all registered solvers (unordered).
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().map(|(&(year, day), e)| SolverInfo {
            year,
            day,
            parts: e.solver.parts(),
            tags: e.tags,
        })
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no solvers
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
