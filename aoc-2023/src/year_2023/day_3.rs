//! Day 3: part numbers and gear ratios in an engine schematic.
//!
//! The schematic is tokenized into positioned number and symbol tokens; a
//! number counts as a part number when a symbol touches its digit span,
//! diagonals included.

use aoc_core::{AocParser, ParseError, SolveError, SolverPlugin};
use regex::Regex;
use std::ops::Range;

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2023,
        day: 3,
        solver: &Solver,
        tags: &["2023", "schematic"],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    value: u32,
    line: usize,
    /// Line-relative columns occupied by the digits (half-open)
    columns: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a> {
    glyph: &'a str,
    line: usize,
    column: usize,
}

pub struct Schematic<'a> {
    numbers: Vec<Number>,
    symbols: Vec<Symbol<'a>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let token_re = Regex::new(r"(?P<number>\d+)|(?P<symbol>[^.\d\n])|(?P<newline>\n)")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        let mut numbers = Vec::new();
        let mut symbols = Vec::new();
        let mut line = 1usize;
        let mut line_start = 0usize;

        for caps in token_re.captures_iter(input) {
            if let Some(m) = caps.name("number") {
                let value = m.as_str().parse().map_err(|_| {
                    ParseError::InvalidFormat(format!(
                        "number too large at line {line}: {}",
                        m.as_str()
                    ))
                })?;
                numbers.push(Number {
                    value,
                    line,
                    columns: m.start() - line_start..m.end() - line_start,
                });
            } else if let Some(m) = caps.name("symbol") {
                symbols.push(Symbol {
                    glyph: m.as_str(),
                    line,
                    column: m.start() - line_start,
                });
            } else if let Some(m) = caps.name("newline") {
                line += 1;
                line_start = m.end();
            }
        }

        if numbers.is_empty() {
            return Err(ParseError::MissingData(
                "schematic contains no numbers".to_string(),
            ));
        }
        Ok(Schematic { numbers, symbols })
    }
}

impl aoc_core::Solver for Solver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(part_1(shared).to_string()),
            2 => Ok(part_2(shared).to_string()),
            p => Err(SolveError::PartNotImplemented(p)),
        }
    }
}

fn part_1(schematic: &Schematic) -> u32 {
    schematic
        .numbers
        .iter()
        .filter(|number| {
            schematic
                .symbols
                .iter()
                .any(|symbol| touches(number, symbol))
        })
        .map(|number| number.value)
        .sum()
}

fn part_2(schematic: &Schematic) -> u64 {
    schematic
        .symbols
        .iter()
        .filter(|symbol| symbol.glyph == "*")
        .filter_map(|gear| {
            let mut cogs = schematic
                .numbers
                .iter()
                .filter(|number| touches(number, gear));
            // A gear is a '*' with exactly two adjacent numbers.
            match (cogs.next(), cogs.next(), cogs.next()) {
                (Some(a), Some(b), None) => Some(u64::from(a.value) * u64::from(b.value)),
                _ => None,
            }
        })
        .sum()
}

/// 8-neighbourhood test: the symbol's cell touches the number's digit span.
fn touches(number: &Number, symbol: &Symbol) -> bool {
    number.line.abs_diff(symbol.line) <= 1
        && number.columns.start <= symbol.column + 1
        && symbol.column <= number.columns.end
}
