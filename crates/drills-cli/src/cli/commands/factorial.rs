use anyhow::{Context, Result};
use drills_core::functions::factorial;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

pub fn run_factorial<R: BufRead, W: Write>(console: &mut Console<R, W>, n: u32) -> Result<()> {
    let value = factorial(n).with_context(|| format!("{n}! does not fit in 128 bits"))?;
    console.say(value)?;
    Ok(())
}
