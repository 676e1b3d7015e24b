//! Advent of Code 2023 puzzle solutions
//!
//! One module per day. Each day implements the `aoc-core` solver traits and
//! submits itself as a plugin, so linking this crate is enough to make the
//! solvers visible to a registry built with `register_all_plugins`.

pub mod year_2023;
