//! CLI parse and session tests.

use super::{Cli, CliCommand};
use clap::Parser;
use drills_core::config::DrillsConfig;
use drills_core::prompt::Console;
use std::io::Cursor;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub(super) fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Parse `args`, run the command against `input`, and return its stdout.
pub(super) fn run(args: &[&str], input: &str) -> anyhow::Result<String> {
    let mut c = console(input);
    parse(args).dispatch(&DrillsConfig::default(), &mut c)?;
    Ok(String::from_utf8(c.into_output()).unwrap())
}
