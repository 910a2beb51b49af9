//! Clock effect handlers
//!
//! `SystemClock` delegates to the operating system for production use.
//! `FixedClock` is the deterministic stand-in for tests: time moves only
//! when the test says so, and every requested sleep is recorded instead of
//! actually waiting.

// Lock poisoning from panics is unrecoverable; expect() is the handling.
#![allow(clippy::expect_used)]

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use dime_core::effects::{ClockEffects, ClockError};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

/// Production clock backed by the operating system
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClockEffects for SystemClock {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }

    async fn sleep(&self, duration: Duration) -> Result<(), ClockError> {
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

struct FixedClockInner {
    now: RwLock<DateTime<Utc>>,
    sleeps: Mutex<Vec<Duration>>,
}

/// Deterministic clock for tests
///
/// `sleep` returns immediately, advances the virtual instant by the
/// requested duration, and appends the request to a log the test can read
/// back through [`FixedClock::recorded_sleeps`]. Clones share state.
#[derive(Clone)]
pub struct FixedClock {
    inner: Arc<FixedClockInner>,
}

impl FixedClock {
    /// Pin the clock to the given instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(FixedClockInner {
                now: RwLock::new(now),
                sleeps: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Move the clock to a new instant
    pub fn set(&self, now: DateTime<Utc>) {
        *self.inner.now.write().expect("FixedClock lock poisoned") = now;
    }

    /// Advance the clock by a duration
    pub fn advance(&self, duration: Duration) {
        let delta = ChronoDuration::from_std(duration).unwrap_or(ChronoDuration::zero());
        let mut now = self.inner.now.write().expect("FixedClock lock poisoned");
        *now += delta;
    }

    /// Every duration passed to `sleep`, in request order
    pub fn recorded_sleeps(&self) -> Vec<Duration> {
        self.inner
            .sleeps
            .lock()
            .expect("FixedClock lock poisoned")
            .clone()
    }
}

#[async_trait]
impl ClockEffects for FixedClock {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(*self.inner.now.read().expect("FixedClock lock poisoned"))
    }

    async fn sleep(&self, duration: Duration) -> Result<(), ClockError> {
        self.inner
            .sleeps
            .lock()
            .expect("FixedClock lock poisoned")
            .push(duration);
        self.advance(duration);
        Ok(())
    }
}
