//! `drills scope` – enclosing read, then an explicit global rebind.

use anyhow::Result;
use drills_core::prompt::Console;
use drills_core::scope::{scope_walkthrough, Globals};
use std::io::{BufRead, Write};

const NEW_GLOBAL: i64 = 12;

pub fn run_scope<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let mut globals = Globals::default();
    let trace = scope_walkthrough(&mut globals, NEW_GLOBAL);
    console.say(trace.enclosing)?;
    console.say(trace.after_rebind)?;
    console.say(trace.global_afterwards)?;
    Ok(())
}
