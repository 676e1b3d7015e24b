//! Day 5: seed-to-location mapping through chained range-remapping tables.

use anyhow::anyhow;
use aoc_core::{AocParser, ParseError, SolveError, SolverPlugin};
use itertools::Itertools;
use regex::Regex;
use std::ops::Range;

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2023,
        day: 5,
        solver: &Solver,
        tags: &["2023", "almanac"],
    }
}

/// One (destination-start, source-start, length) remapping triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRange {
    dest: u64,
    src: u64,
    len: u64,
}

impl MapRange {
    fn forward(self, pos: u64) -> Option<u64> {
        (self.src..self.src + self.len)
            .contains(&pos)
            .then(|| self.dest + (pos - self.src))
    }

    fn backward(self, pos: u64) -> Option<u64> {
        (self.dest..self.dest + self.len)
            .contains(&pos)
            .then(|| self.src + (pos - self.dest))
    }
}

/// An ordered remapping table. A position maps through the first triple
/// whose source interval contains it; everything else maps to itself.
#[derive(Debug)]
pub struct RangeMap {
    pub name: String,
    ranges: Vec<MapRange>,
}

impl RangeMap {
    fn apply(&self, pos: u64) -> u64 {
        self.ranges
            .iter()
            .find_map(|range| range.forward(pos))
            .unwrap_or(pos)
    }

    fn apply_back(&self, pos: u64) -> u64 {
        self.ranges
            .iter()
            .find_map(|range| range.backward(pos))
            .unwrap_or(pos)
    }
}

pub struct SharedData {
    seeds: Vec<u64>,
    maps: Vec<RangeMap>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let number_re = Regex::new(r"\d+").map_err(|e| ParseError::Other(e.to_string()))?;

        let mut blocks = input.trim().split("\n\n");
        let seeds_block = blocks
            .next()
            .ok_or_else(|| ParseError::MissingData("seed list".to_string()))?;
        let seeds = extract_numbers(&number_re, seeds_block)?;
        if seeds.is_empty() {
            return Err(ParseError::MissingData(
                "seed list holds no numbers".to_string(),
            ));
        }

        let maps = blocks
            .map(|block| parse_map(&number_re, block))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SharedData { seeds, maps })
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

fn seed_to_location(seed: u64, maps: &[RangeMap]) -> u64 {
    maps.iter().fold(seed, |pos, map| map.apply(pos))
}

fn location_to_seed(location: u64, maps: &[RangeMap]) -> u64 {
    maps.iter()
        .rev()
        .fold(location, |pos, map| map.apply_back(pos))
}

fn part_1(shared: &SharedData) -> Result<u64, SolveError> {
    shared
        .seeds
        .iter()
        .map(|&seed| seed_to_location(seed, &shared.maps))
        .min()
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("no seeds to map").into()))
}

/// Seeds are (start, length) range pairs here; mapping every seed forward is
/// infeasible at that scale. Instead scan candidate locations from 0 upward
/// and map each backward through the reversed table sequence until the
/// corresponding seed lands in one of the input ranges. The linear scan is
/// not formally bounded, but terminates on real puzzle inputs.
fn part_2(shared: &SharedData) -> Result<u64, SolveError> {
    if shared.seeds.len() % 2 != 0 {
        return Err(SolveError::SolveFailed(
            anyhow!(
                "seed list holds {} numbers, expected (start, length) pairs",
                shared.seeds.len()
            )
            .into(),
        ));
    }
    let seed_ranges: Vec<Range<u64>> = shared
        .seeds
        .iter()
        .copied()
        .tuples()
        .map(|(start, len)| start..start + len)
        .collect();

    (0u64..)
        .find(|&location| {
            let seed = location_to_seed(location, &shared.maps);
            seed_ranges.iter().any(|range| range.contains(&seed))
        })
        .ok_or_else(|| {
            SolveError::SolveFailed(anyhow!("location scan exhausted the u64 range").into())
        })
}

fn extract_numbers(number_re: &Regex, text: &str) -> Result<Vec<u64>, ParseError> {
    number_re
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("number too large: {}", m.as_str())))
        })
        .collect()
}

fn parse_map(number_re: &Regex, block: &str) -> Result<RangeMap, ParseError> {
    let mut lines = block.lines();
    let header = lines
        .next()
        .ok_or_else(|| ParseError::MissingData("empty map block".to_string()))?
        .trim();
    let name = header.strip_suffix(" map:").unwrap_or(header).to_string();
    let ranges = lines
        .map(|line| {
            let numbers = extract_numbers(number_re, line)?;
            match numbers[..] {
                [dest, src, len] => Ok(MapRange { dest, src, len }),
                _ => Err(ParseError::InvalidFormat(format!(
                    "map {name:?}: line {line:?} does not hold exactly three numbers"
                ))),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RangeMap { name, ranges })
}
