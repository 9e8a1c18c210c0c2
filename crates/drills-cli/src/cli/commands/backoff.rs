//! `drills backoff` – fixed-count loop with a doubling wait.

use anyhow::Result;
use drills_core::backoff::{format_wait, run_backoff as run_plan, Sleeper};
use drills_core::config::BackoffConfig;
use drills_core::prompt::Console;
use std::io::{BufRead, Write};

/// Command-line values that take precedence over `[backoff]` in config.
#[derive(Debug, Clone, Default)]
pub struct BackoffOverrides {
    pub max_attempts: Option<u32>,
    pub initial_wait_secs: Option<f64>,
    pub max_wait_secs: Option<f64>,
}

impl BackoffOverrides {
    fn apply(&self, base: &BackoffConfig) -> BackoffConfig {
        BackoffConfig {
            max_attempts: self.max_attempts.unwrap_or(base.max_attempts),
            initial_wait_secs: self.initial_wait_secs.unwrap_or(base.initial_wait_secs),
            max_wait_secs: self.max_wait_secs.or(base.max_wait_secs),
        }
    }
}

pub fn run_backoff<R, W, S>(
    console: &mut Console<R, W>,
    base: &BackoffConfig,
    overrides: &BackoffOverrides,
    sleeper: &mut S,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: Sleeper,
{
    let plan = overrides.apply(base).plan()?;

    // The callback cannot return an error, so hold the first write failure.
    let mut write_err = None;
    run_plan(&plan, sleeper, |attempt, wait| {
        if write_err.is_none() {
            if let Err(e) = console.say(format_args!(
                "Attempt {attempt}, Wait Time {}",
                format_wait(wait)
            )) {
                write_err = Some(e);
            }
        }
    });
    if let Some(e) = write_err {
        return Err(e.into());
    }
    Ok(())
}
