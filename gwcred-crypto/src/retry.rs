//! Bounded fixed-delay retry for RSA segment encryption.
//!
//! The delay goes through a [`Sleeper`] so callers (and tests) can replace
//! wall-clock sleeping.

use std::fmt::Display;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Something that can wait for a fixed duration.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Attempt count and fixed delay between attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Zero behaves like one.
    pub max_attempts: u32,

    /// Delay between attempts, in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 50,
        }
    }
}

/// Terminal failure of a retried operation.
#[derive(Debug)]
pub struct RetryExhausted<E> {
    pub attempts: u32,
    pub last_error: E,
}

impl RetryPolicy {
    /// A policy that tries once and never sleeps.
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            delay_ms: 0,
        }
    }

    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Runs `op` until it succeeds or the attempt budget is spent.
    ///
    /// `op` receives the 1-based attempt number. The sleeper is called
    /// between attempts only, never after the last failure.
    pub fn run<T, E, F>(&self, sleeper: &dyn Sleeper, mut op: F) -> Result<T, RetryExhausted<E>>
    where
        E: Display,
        F: FnMut(u32) -> Result<T, E>,
    {
        let attempts = self.attempts();
        let mut attempt = 1;
        loop {
            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(e) if attempt < attempts => {
                    warn!(
                        attempt,
                        max_attempts = attempts,
                        delay_ms = self.delay_ms,
                        "attempt failed, retrying: {e}"
                    );
                    sleeper.sleep(self.delay());
                    attempt += 1;
                }
                Err(e) => {
                    return Err(RetryExhausted {
                        attempts: attempt,
                        last_error: e,
                    });
                }
            }
        }
    }
}
