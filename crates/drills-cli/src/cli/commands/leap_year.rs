//! `drills leap-year` – leap-year check for one year.

use anyhow::Result;
use drills_core::classify::is_leap_year;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

pub fn run_leap_year<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let year: i64 = console.ask("Enter a year: ")?;
    if is_leap_year(year) {
        console.say(format_args!("{year} is a leap year."))?;
    } else {
        console.say(format_args!("{year} is NOT a leap year."))?;
    }
    Ok(())
}
