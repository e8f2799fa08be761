//! Service context bundling all port trait objects.

use crate::adapters::fixed::{FixedClock, SequentialIdGenerator};
use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, deterministic).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for blocker and test-case identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context: system clock, real filesystem, UUID ids.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Creates a deterministic context for tests: fixed clock, real
    /// filesystem, sequential ids.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            clock: Box::new(FixedClock::epoch()),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(SequentialIdGenerator::new("blocker")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_context_provides_all_ports() {
        let ctx = ServiceContext::live();
        let id = ctx.id_gen.generate_id();
        assert_eq!(id.len(), 36);
        let _ = ctx.clock.now();
    }

    #[test]
    fn deterministic_context_is_reproducible() {
        let a = ServiceContext::deterministic();
        let b = ServiceContext::deterministic();
        assert_eq!(a.clock.now(), b.clock.now());
        assert_eq!(a.id_gen.generate_id(), b.id_gen.generate_id());
    }
}
