/*
[INPUT]:  System wall clock or a pinned timestamp
[OUTPUT]: Unix timestamps in milliseconds for signed requests
[POS]:    Auth layer - time source for the signed envelope
[UPDATE]: When adding new time sources
*/

use std::fmt::Debug;

use chrono::Utc;

/// Source of the `timestamp` parameter attached to signed requests.
///
/// Read exactly once per signed call.
pub trait Clock: Debug + Send + Sync {
    /// Returns the current UNIX timestamp in milliseconds (ms).
    fn timestamp_ms(&self) -> u64;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp_ms(&self) -> u64 {
        // Pre-epoch system time clamps to zero
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
    }
}

/// Clock pinned to a single instant, for reproducible signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    timestamp_ms: u64,
}

impl FixedClock {
    pub fn new(timestamp_ms: u64) -> Self {
        Self { timestamp_ms }
    }
}

impl Clock for FixedClock {
    fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }
}
