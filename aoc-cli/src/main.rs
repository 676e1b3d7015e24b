//! aoc23 - command-line runner for the Advent of Code solvers

mod cli;
mod error;
mod input;
mod output;
mod runner;

// Link the solutions crate so its solver plugins register themselves.
use aoc_2023 as _;

use aoc_core::RegistryBuilder;
use clap::Parser;
use cli::Args;
use error::CliError;
use input::InputStore;
use output::OutputFormatter;
use runner::Runner;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = build_registry(&args.tags)?;

    let input_dir = args
        .input_dir
        .clone()
        .unwrap_or_else(InputStore::default_dir);
    let store = InputStore::new(input_dir);
    let runner = Runner::new(&registry, &args);

    let work_items = runner.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing: Vec<_> = work_items
        .iter()
        .filter(|work| !store.contains(work.year, work.day))
        .collect();
    if !missing.is_empty() {
        println!("Missing {} input file(s):", missing.len());
        for work in &missing {
            println!("  - {}", store.path(work.year, work.day).display());
        }
        println!("Place the puzzle text at the paths above to run those days.");
        println!();
    }

    let formatter = OutputFormatter::new(args.quiet);
    if !args.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let records = runner.execute(&work_items, &store);
    for record in &records {
        formatter.print_result(record);
    }
    formatter.print_summary(&records);

    Ok(())
}

/// Build the registry from linked plugins, optionally filtered by tags
fn build_registry(tags: &[String]) -> Result<aoc_core::SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
