//! `drills kwargs` – named arguments collected into an ordered mapping.

use anyhow::Result;
use drills_core::functions::KeywordArgs;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

/// Parse a single `KEY=VALUE` argument. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn run_kwargs<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    pairs: Vec<(String, String)>,
) -> Result<()> {
    let args: KeywordArgs = pairs.into_iter().collect();
    console.say(format_args!("Keyword arguments received: {args}"))?;
    for line in args.describe_keywords() {
        console.say(line)?;
    }
    Ok(())
}
