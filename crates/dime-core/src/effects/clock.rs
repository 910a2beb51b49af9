//! Clock effect interface
//!
//! Calendar-month aggregates and the login latency window both depend on
//! time, so both go through this trait. Production hosts install a system
//! clock; tests install a fixed one and assert on the requested sleeps.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Error type for clock operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClockError {
    #[error("clock unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Wall-clock access and delay scheduling
#[async_trait]
pub trait ClockEffects: Send + Sync {
    /// Current wall-clock instant
    async fn now(&self) -> Result<DateTime<Utc>, ClockError>;

    /// Suspend for the given duration
    async fn sleep(&self, duration: Duration) -> Result<(), ClockError>;
}

#[async_trait]
impl<T: ClockEffects + ?Sized> ClockEffects for Arc<T> {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        (**self).now().await
    }

    async fn sleep(&self, duration: Duration) -> Result<(), ClockError> {
        (**self).sleep(duration).await
    }
}
