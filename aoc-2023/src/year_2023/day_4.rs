//! Day 4: scratchcard points and the card-duplication cascade.

use anyhow::{Context, anyhow};
use aoc_core::{AocParser, ParseError, SolveError, SolverPlugin};
use std::collections::HashSet;

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2023,
        day: 4,
        solver: &Solver,
        tags: &["2023", "scratchcards"],
    }
}

#[derive(Debug)]
pub struct Card {
    id: u32,
    winning: HashSet<u32>,
    have: HashSet<u32>,
}

impl Card {
    /// Numbers present on both sides of the card
    fn matches(&self) -> usize {
        self.winning.intersection(&self.have).count()
    }

    /// 2^(matches-1) points for at least one match, none otherwise
    fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            m => 1 << (m - 1),
        }
    }
}

#[derive(Debug)]
pub struct SharedData {
    cards: Vec<Card>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| parse_card(line).map_err(|e| anyhow!("(line {}) {e}", idx + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|cards| SharedData { cards })
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

fn part_1(shared: &SharedData) -> u64 {
    shared.cards.iter().map(Card::points).sum()
}

/// Expanding-pile simulation of the duplication cascade: the pile starts
/// with one index per original card, and processing a card with M matches
/// appends the next M original card positions once for this copy. The
/// answer is the final pile size.
fn part_2(shared: &SharedData) -> u64 {
    let matches: Vec<usize> = shared.cards.iter().map(Card::matches).collect();

    let mut pile: Vec<usize> = (0..shared.cards.len()).collect();
    let mut next = 0;
    while next < pile.len() {
        let idx = pile[next];
        // Card ids are 1-based, so `id` is already the position of the card
        // after this one.
        let id = shared.cards[idx].id as usize;
        let copy_until = shared.cards.len().min(id + matches[idx]);
        pile.extend(id..copy_until);
        next += 1;
    }
    pile.len() as u64
}

fn parse_card(line: &str) -> anyhow::Result<Card> {
    let (header, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' in card record"))?;
    let id = header
        .strip_prefix("Card")
        .ok_or_else(|| anyhow!("record does not start with \"Card\""))?
        .trim()
        .parse()
        .context("bad card id")?;
    let (winning_raw, have_raw) = body
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' separator"))?;
    Ok(Card {
        id,
        winning: parse_number_set(winning_raw)?,
        have: parse_number_set(have_raw)?,
    })
}

/// A side of a card may not repeat a number.
fn parse_number_set(raw: &str) -> anyhow::Result<HashSet<u32>> {
    let mut numbers = HashSet::new();
    for token in raw.split_whitespace() {
        let number: u32 = token.parse().with_context(|| format!("bad number {token:?}"))?;
        if !numbers.insert(number) {
            return Err(anyhow!("number {number} listed twice"));
        }
    }
    Ok(numbers)
}
