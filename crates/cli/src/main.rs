mod config;
mod logging;

use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;

use ambit_puzzles::{dwelling, queens, sums, triples, Puzzle};
use anyhow::Context;
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;

use crate::config::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    debug: bool,

    /// Log every choice point and backtrack
    #[arg(short, long)]
    trace: bool,

    /// Read configuration from FILE
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available puzzles
    List,

    /// Sums drawn from two lists of choices
    Sums,

    /// Pythagorean triples
    Triples {
        /// Sides are chosen below this
        #[arg(short, long)]
        limit: Option<u32>,

        /// Try every combination of sides
        #[arg(long)]
        naive: bool,
    },

    /// Multiple dwelling puzzle
    Dwelling,

    /// N queens
    Queens {
        /// Board size
        #[arg(short, long)]
        size: Option<usize>,

        /// Only count the solutions
        #[arg(long)]
        count: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup(logging::level(cli.debug, cli.trace))?;

    let working_dir = std::env::current_dir().context("Failed to get working directory")?;
    let config = config::read_config(cli.config.as_deref(), &working_dir)
        .context("Failed to read configuration")?;
    log::debug!("{config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &config, &mut out)
}

fn run(command: Command, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    log::debug!("Running {command:?}");
    let max = config.output.max_solutions;

    match command {
        Command::List => {
            for puzzle in Puzzle::iter() {
                writeln!(out, "{:<10} {}", puzzle.to_string(), puzzle.description())?;
            }
        }
        Command::Sums => {
            let all = sums::cartesian()?;
            write_line(out, "all", &all)?;
            let even = sums::even()?;
            write_line(out, "even", &even)?;
        }
        Command::Triples { limit, naive } => {
            let limit = limit.unwrap_or(config.triples.limit);
            let found = if naive || config.triples.naive {
                triples::naive(limit)?
            } else {
                triples::bounded(limit)?
            };

            let lines: Vec<String> = found
                .iter()
                .map(|(a, b, c)| format!("{a} {b} {c}"))
                .collect();
            write_solutions(out, &lines, max)?;
        }
        Command::Dwelling => {
            let found = dwelling::solve()?;
            write_solutions(out, &found, max)?;
        }
        Command::Queens { size, count } => {
            let size = size.unwrap_or(config.queens.size);
            if count {
                writeln!(out, "{}", queens::count(size)?)?;
            } else {
                let lines: Vec<String> = queens::solve(size)?
                    .iter()
                    .map(|placement| {
                        placement
                            .iter()
                            .map(|col| (col + 1).to_string())
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect();
                write_solutions(out, &lines, max)?;
            }
        }
    }

    Ok(())
}

fn write_line<T: Display>(out: &mut impl Write, label: &str, items: &[T]) -> io::Result<()> {
    let items: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    writeln!(out, "{label}: {}", items.join(" "))
}

/// Write one solution per line, at most `max` of them unless `max` is 0
fn write_solutions<T: Display>(out: &mut impl Write, solutions: &[T], max: usize) -> io::Result<()> {
    let shown = if max == 0 {
        solutions.len()
    } else {
        max.min(solutions.len())
    };

    for solution in &solutions[..shown] {
        writeln!(out, "{solution}")?;
    }

    if shown < solutions.len() {
        writeln!(out, "... {} more", solutions.len() - shown)?;
    }

    writeln!(out, "{} solutions", solutions.len())
}
