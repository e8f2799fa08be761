//! Development-tracking data model.
//!
//! Everything here is serialized into the tracking snapshot, so fields
//! and enum spellings are stable: downstream exporters (spreadsheet,
//! CSV, Markdown) read these shapes verbatim.

pub mod blocker;
pub mod task;
pub mod test_case;
pub mod tracking;

pub use blocker::{Blocker, Severity};
pub use task::{
    DevelopmentTask, Priority, SpecEntityKind, SpecRef, TaskPhase, TaskStatus, TaskType,
};
pub use test_case::{TestCase, TestCaseStatus};
pub use tracking::{
    ProgressSummary, ProjectHealth, SprintRecord, StatusBreakdown, TrackingDefaults,
    TrackingSnapshot,
};
