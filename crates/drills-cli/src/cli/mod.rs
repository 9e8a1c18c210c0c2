//! CLI for the drills console exercises.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use drills_core::backoff::ThreadSleeper;
use drills_core::config::{self, DrillsConfig};
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

use commands::{
    parse_key_val, run_backoff, run_circle, run_completions, run_evens, run_factorial,
    run_iterate, run_kwargs, run_leap_year, run_password, run_pet_food, run_range, run_scope,
    run_sum, run_table, run_unique, BackoffOverrides, RangeOverrides,
};

/// Top-level CLI for the drills exercises.
#[derive(Debug, Parser)]
#[command(name = "drills")]
#[command(about = "Small console exercises: conditionals, loops, functions, scope", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rate a password as Weak, Medium or Strong by its length.
    Password,

    /// Tell whether a year is a leap year.
    LeapYear,

    /// Recommend pet food from species and age.
    PetFood,

    /// Keep asking until a number inside the range is entered.
    Range {
        /// Smallest accepted value (overrides config).
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        /// Largest accepted value (overrides config).
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
        /// Stop after N rejected attempts instead of asking forever.
        #[arg(long, value_name = "N")]
        max_attempts: Option<u32>,
    },

    /// Run a fixed number of attempts, doubling the wait after each.
    Backoff {
        /// Number of attempts (overrides config).
        #[arg(long, value_name = "N")]
        max_retries: Option<u32>,
        /// First wait in seconds (overrides config).
        #[arg(long, value_name = "SECS")]
        initial_wait: Option<f64>,
        /// Cap on any single wait in seconds (overrides config).
        #[arg(long, value_name = "SECS")]
        max_wait: Option<f64>,
    },

    /// Print a multiplication table, skipping one row.
    Table {
        /// Row to leave out.
        #[arg(long, default_value = "5", allow_negative_numbers = true)]
        skip: i64,
    },

    /// Report the first repeated item.
    Unique {
        /// Items to scan (defaults to a small fruit list).
        items: Vec<String>,
    },

    /// Area and circumference of a circle.
    Circle {
        /// Circle radius.
        #[arg(default_value = "3", allow_negative_numbers = true)]
        radius: f64,
    },

    /// Add up any number of integers.
    Sum {
        /// Values to add.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Echo named arguments in the order given.
    Kwargs {
        /// Arguments as KEY=VALUE.
        #[arg(value_parser = parse_key_val)]
        pairs: Vec<(String, String)>,
    },

    /// Factorial computed recursively.
    Factorial {
        #[arg(default_value = "5")]
        n: u32,
    },

    /// Even numbers from 0 up to LIMIT.
    Evens {
        #[arg(default_value = "10", allow_negative_numbers = true)]
        limit: i64,
    },

    /// Step through a list, a map and a range with has-next/next.
    Iterate,

    /// Show enclosing-scope reads and an explicit global rebind.
    Scope,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut console = Console::stdio();
        cli.command.dispatch(&cfg, &mut console)
    }

    /// Run one command against an arbitrary console.
    pub fn dispatch<R: BufRead, W: Write>(
        self,
        cfg: &DrillsConfig,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        match self {
            CliCommand::Password => run_password(console)?,
            CliCommand::LeapYear => run_leap_year(console)?,
            CliCommand::PetFood => run_pet_food(console)?,
            CliCommand::Range {
                min,
                max,
                max_attempts,
            } => {
                let overrides = RangeOverrides {
                    min,
                    max,
                    max_attempts,
                };
                run_range(console, &cfg.range, &overrides)?;
            }
            CliCommand::Backoff {
                max_retries,
                initial_wait,
                max_wait,
            } => {
                let overrides = BackoffOverrides {
                    max_attempts: max_retries,
                    initial_wait_secs: initial_wait,
                    max_wait_secs: max_wait,
                };
                run_backoff(console, &cfg.backoff, &overrides, &mut ThreadSleeper)?;
            }
            CliCommand::Table { skip } => run_table(console, skip)?,
            CliCommand::Unique { items } => run_unique(console, &items)?,
            CliCommand::Circle { radius } => run_circle(console, radius)?,
            CliCommand::Sum { values } => run_sum(console, &values)?,
            CliCommand::Kwargs { pairs } => run_kwargs(console, pairs)?,
            CliCommand::Factorial { n } => run_factorial(console, n)?,
            CliCommand::Evens { limit } => run_evens(console, limit)?,
            CliCommand::Iterate => run_iterate(console)?,
            CliCommand::Scope => run_scope(console)?,
            CliCommand::Completions { shell } => run_completions(shell, console)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
