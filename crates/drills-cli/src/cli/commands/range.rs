//! `drills range` – re-prompt until a number inside the range is entered.

use anyhow::{bail, Result};
use drills_core::config::RangeConfig;
use drills_core::prompt::{ask_in_range, Console};
use std::io::{BufRead, Write};

/// Command-line values that take precedence over `[range]` in config.
#[derive(Debug, Clone, Default)]
pub struct RangeOverrides {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub max_attempts: Option<u32>,
}

impl RangeOverrides {
    fn apply(&self, base: &RangeConfig) -> Result<RangeConfig> {
        let merged = RangeConfig {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            max_attempts: self.max_attempts.or(base.max_attempts),
        };
        if merged.min > merged.max {
            bail!("--min ({}) must not exceed --max ({})", merged.min, merged.max);
        }
        if merged.max_attempts == Some(0) {
            bail!("--max-attempts must be at least 1");
        }
        Ok(merged)
    }
}

pub fn run_range<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    base: &RangeConfig,
    overrides: &RangeOverrides,
) -> Result<()> {
    let cfg = overrides.apply(base)?;
    let prompt = format!("Enter a number between {} and {}: ", cfg.min, cfg.max);
    let number = ask_in_range(console, &prompt, cfg.min..=cfg.max, &cfg.ask_options())?;
    console.say(format_args!("You entered a valid number: {number}"))?;
    Ok(())
}
