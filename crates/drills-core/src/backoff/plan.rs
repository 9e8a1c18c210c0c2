//! Wait schedule for the backoff loop.

use std::time::Duration;

/// Attempt count and wait growth for one backoff run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPlan {
    /// Number of attempts; each one is followed by a wait.
    pub max_attempts: u32,
    /// Wait after the first attempt.
    pub initial_wait: Duration,
    /// Upper bound on any single wait (None = uncapped doubling).
    pub max_wait: Option<Duration>,
}

impl Default for BackoffPlan {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_wait: Duration::from_secs(1),
            max_wait: None,
        }
    }
}

impl BackoffPlan {
    pub fn new(max_attempts: u32, initial_wait: Duration) -> Self {
        Self {
            max_attempts,
            initial_wait,
            max_wait: None,
        }
    }

    pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Wait for the given 1-based attempt: `initial * 2^(attempt-1)`,
    /// saturating at `Duration::MAX`, then capped.
    pub fn wait_for(&self, attempt: u32) -> Duration {
        let initial = self.initial_wait.as_nanos();
        let wait = if initial == 0 {
            Duration::ZERO
        } else {
            1u128
                .checked_shl(attempt.saturating_sub(1))
                .and_then(|factor| initial.checked_mul(factor))
                .map_or(Duration::MAX, duration_from_nanos_saturating)
        };
        match self.max_wait {
            Some(cap) => wait.min(cap),
            None => wait,
        }
    }

    /// Lazily yields exactly `max_attempts` waits.
    pub fn waits(&self) -> Waits {
        Waits {
            plan: *self,
            next_attempt: 1,
        }
    }

    /// Sum of every wait in the schedule, saturating.
    pub fn total_wait(&self) -> Duration {
        self.waits()
            .fold(Duration::ZERO, |acc, d| acc.saturating_add(d))
    }
}

/// Iterator over a plan's waits; see [`BackoffPlan::waits`].
#[derive(Debug, Clone)]
pub struct Waits {
    plan: BackoffPlan,
    next_attempt: u64,
}

impl Iterator for Waits {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let attempt = u32::try_from(self.next_attempt).ok()?;
        if attempt > self.plan.max_attempts {
            return None;
        }
        let wait = self.plan.wait_for(attempt);
        self.next_attempt += 1;
        Some(wait)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (u64::from(self.plan.max_attempts) + 1).saturating_sub(self.next_attempt) as usize;
        (left, Some(left))
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

fn duration_from_nanos_saturating(nanos: u128) -> Duration {
    match u64::try_from(nanos / NANOS_PER_SEC) {
        Ok(secs) => Duration::new(secs, (nanos % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}

/// Render a wait as seconds: `4` when whole, `0.25` otherwise.
pub fn format_wait(wait: Duration) -> String {
    if wait.subsec_nanos() == 0 {
        wait.as_secs().to_string()
    } else {
        format!("{}", wait.as_secs_f64())
    }
}
