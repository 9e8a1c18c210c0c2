//! `drills sum` – positional arguments collected into a slice.

use anyhow::{Context, Result};
use drills_core::functions::sum_all;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

pub fn run_sum<R: BufRead, W: Write>(console: &mut Console<R, W>, values: &[i64]) -> Result<()> {
    console.say(format_args!("Arguments received: {values:?}"))?;
    let total = sum_all(values).context("sum does not fit in a 64-bit integer")?;
    console.say(total)?;
    Ok(())
}
