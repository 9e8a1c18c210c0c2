//! Backoff loop: run every attempt, sleeping the planned wait after each.

use std::time::Duration;

use super::plan::BackoffPlan;

/// Where the loop suspends. Production code blocks the thread; tests
/// record the requested waits instead.
pub trait Sleeper {
    fn sleep(&mut self, wait: Duration);
}

/// Blocks the calling thread with `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, wait: Duration) {
        std::thread::sleep(wait);
    }
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffReport {
    pub attempts: u32,
    pub total_wait: Duration,
}

/// Milliseconds as a log field, clamped to `u64::MAX` for saturated waits.
fn millis_for_log(wait: Duration) -> u64 {
    u64::try_from(wait.as_millis()).unwrap_or(u64::MAX)
}

/// Runs `plan.max_attempts` attempts. For each one, `on_attempt` is called
/// with the 1-based attempt number and the upcoming wait, then the sleeper
/// waits. Never exits early.
pub fn run_backoff<S, F>(plan: &BackoffPlan, sleeper: &mut S, mut on_attempt: F) -> BackoffReport
where
    S: Sleeper + ?Sized,
    F: FnMut(u32, Duration),
{
    let mut report = BackoffReport {
        attempts: 0,
        total_wait: Duration::ZERO,
    };
    for wait in plan.waits() {
        report.attempts += 1;
        tracing::debug!(attempt = report.attempts, wait_ms = millis_for_log(wait), "backoff attempt");
        on_attempt(report.attempts, wait);
        sleeper.sleep(wait);
        report.total_wait = report.total_wait.saturating_add(wait);
    }
    tracing::info!(
        attempts = report.attempts,
        total_wait_ms = millis_for_log(report.total_wait),
        "backoff finished"
    );
    report
}
