//! `drills iterate` – manual has-next/next walks over three kinds of sequence.

use anyhow::Result;
use drills_core::iteration::Cursor;
use drills_core::prompt::Console;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

pub fn run_iterate<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let mut list = Cursor::new(vec![1, 2, 3, 4, 5]);
    while let Some(n) = list.next_item() {
        console.say(n)?;
    }
    console.say("Iteration complete.")?;

    let map = BTreeMap::from([("a", 1), ("b", 2)]);
    let mut keys = Cursor::new(map.keys());
    while keys.has_next() {
        if let Some(key) = keys.next_item() {
            console.say(format_args!("Key: {key}, Value: {}", map[key]))?;
        }
    }
    console.say("Iteration over dictionary complete.")?;

    let mut range = Cursor::new(0..5);
    while let Some(n) = range.next_item() {
        console.say(n)?;
    }
    console.say("Iteration over range complete.")?;
    Ok(())
}
