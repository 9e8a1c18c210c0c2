//! `drills unique` – stop at the first repeated item.

use anyhow::Result;
use drills_core::loops::first_duplicate;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

const DEFAULT_ITEMS: [&str; 5] = ["apple", "banana", "orange", "apple", "banana"];

pub fn run_unique<R: BufRead, W: Write>(console: &mut Console<R, W>, items: &[String]) -> Result<()> {
    let items: Vec<&str> = if items.is_empty() {
        DEFAULT_ITEMS.to_vec()
    } else {
        items.iter().map(String::as_str).collect()
    };
    match first_duplicate(&items) {
        Some(item) => console.say(format_args!("Duplicate {item}"))?,
        None => console.say("No duplicates found.")?,
    }
    Ok(())
}
