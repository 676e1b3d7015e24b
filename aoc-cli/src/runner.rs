//! Sequential executor for running solvers

use crate::cli::Args;
use crate::input::InputStore;
use aoc_core::SolverRegistry;
use chrono::TimeDelta;
use itertools::Itertools;
use std::ops::RangeInclusive;

/// A solver selected for execution
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Outcome of one (year, day, part) run
pub struct RunRecord {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// The answer, or a rendered error
    pub answer: Result<String, String>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: Option<TimeDelta>,
}

impl RunRecord {
    fn failed(year: u16, day: u8, part: u8, error: &impl std::fmt::Display) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error.to_string()),
            parse_duration: None,
            solve_duration: None,
        }
    }
}

/// Runs selected solvers strictly in (year, day, part) order.
pub struct Runner<'r> {
    registry: &'r SolverRegistry,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r SolverRegistry, args: &Args) -> Self {
        Self {
            registry,
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
        }
    }

    /// Collect work items from registry metadata, applying the filters
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .sorted_by_key(|info| (info.year, info.day))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|work| !work.parts.is_empty())
            .collect()
    }

    /// Narrow parts to the part filter, bounded by the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Run every work item, producing one record per (year, day, part)
    pub fn execute(&self, work_items: &[WorkItem], store: &InputStore) -> Vec<RunRecord> {
        let mut records = Vec::new();
        for work in work_items {
            self.run_one(work, store, &mut records);
        }
        records
    }

    fn run_one(&self, work: &WorkItem, store: &InputStore, records: &mut Vec<RunRecord>) {
        let input = match store.load(work.year, work.day) {
            Ok(input) => input,
            Err(e) => {
                for part in work.parts.clone() {
                    records.push(RunRecord::failed(work.year, work.day, part, &e));
                }
                return;
            }
        };

        let mut solver = match self.registry.create_solver(work.year, work.day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                for part in work.parts.clone() {
                    records.push(RunRecord::failed(work.year, work.day, part, &e));
                }
                return;
            }
        };

        for part in work.parts.clone() {
            let record = match solver.solve(part) {
                Ok(report) => {
                    let solve_duration = Some(report.duration());
                    RunRecord {
                        year: work.year,
                        day: work.day,
                        part,
                        answer: Ok(report.answer),
                        parse_duration: Some(solver.parse_duration()),
                        solve_duration,
                    }
                }
                Err(e) => RunRecord::failed(work.year, work.day, part, &e),
            };
            records.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_core::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
    use tempfile::TempDir;

    struct LineCount;

    impl AocParser for LineCount {
        type SharedData<'a> = Vec<&'a str>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            Ok(input.lines().collect())
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 => Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string()),
                p => Err(SolveError::PartNotImplemented(p)),
            }
        }
    }

    struct OnePart;

    impl AocParser for OnePart {
        type SharedData<'a> = ();

        fn parse<'a>(_input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            Ok(())
        }
    }

    impl Solver for OnePart {
        const PARTS: u8 = 1;

        fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok("only".to_string()),
                p => Err(SolveError::PartNotImplemented(p)),
            }
        }
    }

    fn registry() -> aoc_core::SolverRegistry {
        RegistryBuilder::new()
            .register(2023, 2, &LineCount, &[])
            .unwrap()
            .register(2023, 1, &OnePart, &[])
            .unwrap()
            .build()
    }

    fn args() -> Args {
        Args {
            year: None,
            day: None,
            part: None,
            tags: Vec::new(),
            input_dir: None,
            quiet: false,
        }
    }

    #[test]
    fn work_items_are_ordered_and_filtered() {
        let registry = registry();

        let runner = Runner::new(&registry, &args());
        let items = runner.collect_work_items();
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].year, items[0].day), (2023, 1));
        assert_eq!((items[1].year, items[1].day), (2023, 2));

        let runner = Runner::new(
            &registry,
            &Args {
                day: Some(2),
                ..args()
            },
        );
        let items = runner.collect_work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].day, 2);
    }

    #[test]
    fn part_filter_drops_solvers_without_that_part() {
        let registry = registry();
        let runner = Runner::new(
            &registry,
            &Args {
                part: Some(2),
                ..args()
            },
        );

        // OnePart has no part 2, so only the day-2 solver survives.
        let items = runner.collect_work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].day, 2);
        assert_eq!(items[0].parts, 2..=2);
    }

    #[test]
    fn execute_records_answers_with_timings() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        std::fs::write(store.path(2023, 2), "ab\ncde\n").unwrap();
        std::fs::write(store.path(2023, 1), "anything\n").unwrap();

        let registry = registry();
        let runner = Runner::new(&registry, &args());
        let records = runner.execute(&runner.collect_work_items(), &store);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].answer.as_deref(), Ok("only"));
        assert_eq!(records[1].answer.as_deref(), Ok("2"));
        assert_eq!(records[2].answer.as_deref(), Ok("5"));
        assert!(records.iter().all(|r| r.parse_duration.is_some()));
        assert!(records.iter().all(|r| r.solve_duration.is_some()));
    }

    #[test]
    fn missing_input_yields_error_records() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let registry = registry();
        let runner = Runner::new(
            &registry,
            &Args {
                day: Some(2),
                ..args()
            },
        );
        let records = runner.execute(&runner.collect_work_items(), &store);

        assert_eq!(records.len(), 2);
        for record in &records {
            let err = record.answer.as_ref().unwrap_err();
            assert!(err.contains("2023_day02.txt"), "got: {err}");
        }
    }
}
