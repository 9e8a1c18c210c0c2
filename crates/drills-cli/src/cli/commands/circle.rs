//! `drills circle` – area and circumference.

use anyhow::Result;
use drills_core::functions::{circle_stats, CircleStats};
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

pub fn run_circle<R: BufRead, W: Write>(console: &mut Console<R, W>, radius: f64) -> Result<()> {
    let CircleStats {
        area,
        circumference,
    } = circle_stats(radius);
    console.say(format_args!("Area: {area}"))?;
    console.say(format_args!("Circumference: {circumference}"))?;
    Ok(())
}
