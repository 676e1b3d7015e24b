//! Day 2: feasibility and power of recorded cube games.

use anyhow::{Context, anyhow};
use aoc_core::{AocParser, ParseError, SolveError, SolverPlugin};

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2023,
        day: 2,
        solver: &Solver,
        tags: &["2023", "cube-games"],
    }
}

/// A handful of cubes revealed at one draw
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeSet {
    fn max_with(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_in(self, bag: CubeSet) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    reveals: Vec<CubeSet>,
}

impl Game {
    /// Componentwise maximum over all reveals: the fewest cubes per colour
    /// the bag must have held for the game to be possible.
    fn max_seen(&self) -> CubeSet {
        self.reveals
            .iter()
            .copied()
            .fold(CubeSet::default(), CubeSet::max_with)
    }
}

#[derive(Debug)]
pub struct SharedData {
    games: Vec<Game>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| parse_game(line).map_err(|e| anyhow!("(line {}) {e}", idx + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|games| SharedData { games })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
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

/// The fixed bag the games are checked against
const BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

fn part_1(shared: &SharedData) -> u32 {
    shared
        .games
        .iter()
        .filter(|game| game.max_seen().fits_in(BAG))
        .map(|game| game.id)
        .sum()
}

fn part_2(shared: &SharedData) -> u64 {
    shared.games.iter().map(|game| game.max_seen().power()).sum()
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (header, reveals_raw) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' in game record"))?;
    let id = header
        .strip_prefix("Game")
        .ok_or_else(|| anyhow!("record does not start with \"Game\""))?
        .trim()
        .parse()
        .context("bad game id")?;
    let reveals = reveals_raw
        .split(';')
        .map(parse_reveal)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Game { id, reveals })
}

fn parse_reveal(raw: &str) -> anyhow::Result<CubeSet> {
    let mut set = CubeSet::default();
    for pair in raw.split(',') {
        let (count, colour) = pair
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected \"count colour\", got {pair:?}"))?;
        let count: u32 = count
            .trim()
            .parse()
            .with_context(|| format!("bad cube count in {pair:?}"))?;
        match colour.trim() {
            "red" => set.red += count,
            "green" => set.green += count,
            "blue" => set.blue += count,
            other => return Err(anyhow!("unknown cube colour {other:?}")),
        }
    }
    Ok(set)
}
