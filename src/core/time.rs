//! Time provider abstraction for testable time-dependent logic

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time
pub trait TimeProvider: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production time provider using the system clock
#[derive(Debug, Default, Clone)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time provider frozen at a single instant
#[derive(Debug, Clone)]
pub struct FixedTimeProvider {
    instant: DateTime<Utc>,
}

impl FixedTimeProvider {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Frozen at a UNIX timestamp in seconds, `None` when out of range
    pub fn from_unix_seconds(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self::new)
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }
}
