//! `drills password` – rate a password by length.

use anyhow::Result;
use drills_core::classify::password_strength;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

pub fn run_password<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let password = console.read_line("Enter your password: ")?;
    let strength = password_strength(&password);
    tracing::debug!(%strength, "classified password");
    console.say(format_args!("Password strength is {strength}"))?;
    Ok(())
}
