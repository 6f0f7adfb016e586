// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Adaptive poll pacing.

use std::time::Duration;

/// Default delay between polls while the service is healthy.
pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_millis(2500);

/// Upper bound on the delay between polls during an outage.
pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_millis(15_000);

/// Pacing for the background poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub base_interval: Duration,
    pub max_interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            base_interval: DEFAULT_BASE_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
        }
    }
}

/// Delay-doubling-on-failure, reset-on-success backoff.
///
/// `on_failure` hands out the current delay and doubles the one after it, so
/// consecutive failures sleep base, 2×base, 4×base, ... never above the max.
#[derive(Debug, Clone)]
pub struct Backoff {
    config: PollConfig,
    next: Duration,
    failures: u32,
}

impl Backoff {
    pub fn new(config: PollConfig) -> Self {
        Backoff {
            config,
            next: config.base_interval.min(config.max_interval),
            failures: 0,
        }
    }

    /// Records a successful attempt and returns the delay before the next one.
    pub fn on_success(&mut self) -> Duration {
        self.failures = 0;
        self.next = self.base();
        self.next
    }

    /// Records a failed attempt and returns the delay before the next one.
    pub fn on_failure(&mut self) -> Duration {
        let delay = self.next;
        self.failures = self.failures.saturating_add(1);
        self.next = delay.saturating_mul(2).min(self.config.max_interval);
        delay
    }

    /// Delay the next failure would hand out.
    pub fn peek(&self) -> Duration {
        self.next
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.failures
    }

    fn base(&self) -> Duration {
        self.config.base_interval.min(self.config.max_interval)
    }
}

#[cfg(test)]
#[path = "backoff_tests.rs"]
mod tests;
