use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

use crate::cli::Cli;

/// Write a completion script for `shell` to the console output.
pub fn run_completions<R: BufRead, W: Write>(shell: Shell, console: &mut Console<R, W>) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "drills", console.output_mut());
    Ok(())
}
