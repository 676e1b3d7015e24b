//! Day 1: recover calibration values from an amended document.

use anyhow::anyhow;
use aoc_core::{AocParser, ParseError, SolveError, SolverPlugin};

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2023,
        day: 1,
        solver: &Solver,
        tags: &["2023", "calibration"],
    }
}

const SPELLED_DIGITS: [(&str, char); 10] = [
    ("zero", '0'),
    ("one", '1'),
    ("two", '2'),
    ("three", '3'),
    ("four", '4'),
    ("five", '5'),
    ("six", '6'),
    ("seven", '7'),
    ("eight", '8'),
    ("nine", '9'),
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData(
                "calibration document has no lines".to_string(),
            ));
        }
        Ok(lines)
    }
}

impl aoc_core::Solver for Solver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => part_1(shared).map(|n| n.to_string()),
            2 => part_2(shared).map(|n| n.to_string()),
            p => Err(SolveError::PartNotImplemented(p)),
        }
    }
}

fn part_1(lines: &[&str]) -> Result<u32, SolveError> {
    lines.iter().map(|line| calibration_value(line)).sum()
}

fn part_2(lines: &[&str]) -> Result<u32, SolveError> {
    lines
        .iter()
        .map(|line| calibration_value(&spell_out_digits(line)))
        .sum()
}

/// Two-digit number from the first and last digit of a line. A line with a
/// single digit uses it for both positions.
fn calibration_value(line: &str) -> Result<u32, SolveError> {
    let mut digits = line.chars().filter_map(|c| c.to_digit(10));
    let first = digits
        .next()
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("no digit in line {line:?}").into()))?;
    let last = digits.last().unwrap_or(first);
    Ok(first * 10 + last)
}

/// Rewrite spelled-out digit words as `<first letter><digit><last letter>`
/// (`eight` -> `e8t`). Keeping the boundary letters means overlapping words
/// like "eightwo" still resolve to both digits.
fn spell_out_digits(line: &str) -> String {
    SPELLED_DIGITS
        .iter()
        .fold(line.to_string(), |acc, &(word, digit)| {
            let first = &word[..1];
            let last = &word[word.len() - 1..];
            acc.replace(word, &format!("{first}{digit}{last}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::support::solve;
    use proptest::prelude::*;

    const SAMPLE_DIGITS: &str = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";

    const SAMPLE_SPELLED: &str = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen\n";

    #[test]
    fn per_line_values() {
        for (line, expected) in [
            ("1abc2", 12),
            ("pqr3stu8vwx", 38),
            ("a1b2c3d4e5f", 15),
            ("treb7uchet", 77),
        ] {
            assert_eq!(calibration_value(line).unwrap(), expected, "line {line:?}");
        }
    }

    #[test]
    fn sample_part_1() {
        assert_eq!(solve::<Solver>(SAMPLE_DIGITS, 1), "142");
        // No spelled words in the digit-only sample, so part 2 agrees.
        assert_eq!(solve::<Solver>(SAMPLE_DIGITS, 2), "142");
    }

    #[test]
    fn sample_part_2() {
        assert_eq!(solve::<Solver>(SAMPLE_SPELLED, 2), "281");
    }

    #[test]
    fn spelled_lines_resolve() {
        for (line, expected) in [
            ("two1nine", 29),
            ("eightwothree", 83),
            ("abcone2threexyz", 13),
            ("xtwone3four", 24),
            ("4nineeightseven2", 42),
            ("zoneight234", 14),
            ("7pqrstsixteen", 76),
        ] {
            assert_eq!(
                calibration_value(&spell_out_digits(line)).unwrap(),
                expected,
                "line {line:?}"
            );
        }
    }

    #[test]
    fn overlapping_words_keep_both_digits() {
        assert_eq!(calibration_value(&spell_out_digits("eightwo")).unwrap(), 82);
        assert_eq!(calibration_value(&spell_out_digits("twone")).unwrap(), 21);
        assert_eq!(calibration_value(&spell_out_digits("oneight")).unwrap(), 18);
    }

    #[test]
    fn line_without_digits_is_an_error() {
        assert!(calibration_value("nodigitshere").is_err());
    }

    proptest! {
        /// Planting two digits in letter padding always recovers first*10 + last.
        #[test]
        fn prop_planted_digits_recovered(
            first in 0u32..10,
            last in 0u32..10,
            pad_a in "[a-z]{0,8}",
            pad_b in "[a-z]{0,8}",
            pad_c in "[a-z]{0,8}",
        ) {
            let line = format!("{pad_a}{first}{pad_b}{last}{pad_c}");
            prop_assert_eq!(calibration_value(&line).unwrap(), first * 10 + last);
        }
    }
}
