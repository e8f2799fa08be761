//! ID generator port for producing unique identifiers.

/// Generates unique identifiers for records created after generation
/// (blockers, test cases).
///
/// Task ids are deliberately *not* drawn from this port: the factory
/// allocates them from a run-scoped counter so that regenerating the
/// same specification produces identical, diffable ids.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
