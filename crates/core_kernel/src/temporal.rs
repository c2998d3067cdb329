//! Protocol time
//!
//! The registries never read the wall clock directly. They ask a [`Clock`]
//! for the current [`Timestamp`], which can be a Unix clock in production
//! or a manually driven clock in tests (the equivalent of a block height).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Unsigned point in protocol time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The unset timestamp, used for claims that have not been processed
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns this timestamp moved forward by `duration`, saturating at `u64::MAX`
    pub fn plus(&self, duration: u64) -> Self {
        Self(self.0.saturating_add(duration))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Source of the current protocol time
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock reporting Unix seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // Pre-epoch clocks clamp to zero
        Timestamp(u64::try_from(Utc::now().timestamp()).unwrap_or(0))
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    current: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            current: AtomicU64::new(start),
        }
    }

    pub fn set(&self, value: u64) {
        self.current.store(value, Ordering::SeqCst);
    }

    /// Moves the clock forward and returns the new time
    pub fn advance(&self, delta: u64) -> Timestamp {
        let previous = self
            .current
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| Some(v.saturating_add(delta)))
            .unwrap_or_else(|v| v);
        Timestamp(previous.saturating_add(delta))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.current.load(Ordering::SeqCst))
    }
}
