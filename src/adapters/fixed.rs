//! Deterministic adapters: a fixed clock and a sequential ID generator.
//!
//! Used wherever reproducibility matters — unit tests, and any caller
//! that wants stable ids for records created outside a generation run.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;

/// Clock that always returns the same instant.
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock pinned to 2025-01-01T00:00:00Z.
    #[must_use]
    pub fn epoch() -> Self {
        Self::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// ID generator that produces `<prefix>-001`, `<prefix>-002`, ….
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator with the given id prefix, starting at 1.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string(), next: AtomicU64::new(1) }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{n:03}", self.prefix)
    }
}
