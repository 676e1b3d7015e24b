//! Property-based tests for the part-bounds contract of `solve_part_checked`

use aoc_core::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse<'a>(_input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// For any PARTS = N, part 0 and every part > N are rejected with
    /// `PartOutOfRange`, and every part in 1..=N succeeds.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let mut shared = ();

        let (result, effective_max) = match max_parts {
            1 => (TestSolver::<1>::solve_part_checked(&mut shared, part), 1),
            2 => (TestSolver::<2>::solve_part_checked(&mut shared, part), 2),
            _ => (TestSolver::<3>::solve_part_checked(&mut shared, part), 3),
        };

        if part == 0 || part > effective_max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "expected Ok for part {} with max {}", part, effective_max);
        }
    }

    /// Within 1..=PARTS, the checked call delegates to `solve_part` unchanged.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let mut shared = ();
        let mut shared2 = ();

        let checked = TestSolver::<2>::solve_part_checked(&mut shared, part);
        let direct = TestSolver::<2>::solve_part(&mut shared2, part);

        prop_assert!(checked.is_ok());
        prop_assert!(direct.is_ok());
        prop_assert_eq!(checked.unwrap(), direct.unwrap());
    }
}

mod unit_tests {
    use super::*;

    #[test]
    fn part_zero_rejected() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked(&mut shared, 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn part_exceeding_max_rejected() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked(&mut shared, 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn valid_part_succeeds() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked(&mut shared, 1);
        assert_eq!(result.unwrap(), "part1");
    }
}
