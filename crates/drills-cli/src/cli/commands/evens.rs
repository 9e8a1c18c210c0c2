use anyhow::Result;
use drills_core::functions::EvenNumbers;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

pub fn run_evens<R: BufRead, W: Write>(console: &mut Console<R, W>, limit: i64) -> Result<()> {
    for n in &EvenNumbers::new(limit) {
        console.say(n)?;
    }
    Ok(())
}
