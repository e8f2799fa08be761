//! Error types for the devtrack engine and store.

use thiserror::Error;

/// Errors reported by generation, lifecycle, and persistence operations.
///
/// Everything here is recoverable: devtrack is an offline planning tool,
/// so callers report these to the user rather than aborting.
#[derive(Error, Debug)]
pub enum TrackError {
    /// The input specification is structurally incomplete.
    #[error("invalid specification: {reason}")]
    InvalidSpecification {
        /// What was missing or malformed.
        reason: String,
    },

    /// A dependency cycle was detected during strict generation.
    #[error("cyclic dependency detected: {cycle}")]
    CyclicDependency {
        /// The cycle rendered as `id -> id -> id`.
        cycle: String,
    },

    /// A lifecycle mutation referenced a task that does not exist.
    #[error("unknown task: {id}")]
    UnknownTask {
        /// The task id that was not found.
        id: String,
    },

    /// A lifecycle mutation referenced a blocker that does not exist.
    #[error("unknown blocker: {id}")]
    UnknownBlocker {
        /// The blocker id that was not found.
        id: String,
    },

    /// A test-case mutation referenced a test case that does not exist.
    #[error("unknown test case: {id}")]
    UnknownTestCase {
        /// The test-case id that was not found.
        id: String,
    },

    /// A tracking snapshot already exists and tasks were already generated.
    ///
    /// Generation runs exactly once per project; pass `--force` to discard
    /// the existing snapshot and regenerate.
    #[error("tasks were already generated for this project (use --force to regenerate)")]
    AlreadyGenerated,

    /// A file could not be read or written.
    #[error("io error for {path}: {message}")]
    Io {
        /// The path involved.
        path: String,
        /// The underlying error message.
        message: String,
    },

    /// A file could not be parsed or a value could not be serialized.
    #[error("parse error for {path}: {message}")]
    Parse {
        /// The path involved.
        path: String,
        /// The underlying error message.
        message: String,
    },
}
