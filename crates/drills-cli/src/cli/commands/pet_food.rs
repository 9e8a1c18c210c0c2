//! `drills pet-food` – food recommendation from species and age.

use anyhow::Result;
use drills_core::classify::classify_pet;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

pub fn run_pet_food<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let species = console.read_line("Enter pet species (dog/cat): ")?;
    let age: i64 = console.ask("Enter pet age in years: ")?;
    let food = classify_pet(&species, age);
    tracing::debug!(species = %species.trim(), age, %food, "recommended pet food");
    console.say(format_args!("Recommended food: {food}"))?;
    Ok(())
}
