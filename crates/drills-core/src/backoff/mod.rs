//! Bounded exponential backoff.
//!
//! A fixed number of attempts with a wait that doubles after each one.
//! There is no success condition: the loop always runs every attempt and
//! then stops.

mod plan;
mod run;

pub use plan::{format_wait, BackoffPlan, Waits};
pub use run::{run_backoff, BackoffReport, Sleeper, ThreadSleeper};
