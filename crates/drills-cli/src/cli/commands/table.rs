//! `drills table` – multiplication table with one row skipped.

use anyhow::{Context, Result};
use drills_core::loops::multiplication_table;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

pub fn run_table<R: BufRead, W: Write>(console: &mut Console<R, W>, skip: i64) -> Result<()> {
    let number: i64 = console.ask("Enter a number to generate its multiplication table: ")?;
    let rows = multiplication_table(number, Some(skip))
        .with_context(|| format!("multiplication table of {number} overflows a 64-bit integer"))?;
    for row in rows {
        console.say(row)?;
    }
    Ok(())
}
