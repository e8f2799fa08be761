//! The development-tracking snapshot and derived progress types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::blocker::Blocker;
use super::task::DevelopmentTask;

/// A sprint record in the snapshot.
///
/// The generator only assigns labels on tasks; date-bearing sprint
/// records are a downstream concern, so this collection stays empty at
/// generation time. The shape exists so that exporters see a stable
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintRecord {
    /// 1-based sprint index.
    pub number: u32,
    /// Sprint label (`"Sprint 3"`).
    pub label: String,
}

/// Per-bucket task counts in a progress breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatusBreakdown {
    /// Total tasks in the bucket.
    pub total: u32,
    /// Tasks with status `done`.
    pub done: u32,
    /// Tasks with status `in_progress`.
    pub in_progress: u32,
}

/// Three-valued project health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectHealth {
    /// Fewer than four active blockers and acceptable progress.
    #[default]
    OnTrack,
    /// Large task list with under 30% completion.
    AtRisk,
    /// More than three active blockers.
    Behind,
}

impl ProjectHealth {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OnTrack => "on track",
            Self::AtRisk => "at risk",
            Self::Behind => "behind",
        }
    }

    /// Traffic-light color used by UI consumers.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::OnTrack => "green",
            Self::AtRisk => "yellow",
            Self::Behind => "red",
        }
    }
}

/// Rollup counters derived from the current task and blocker lists.
///
/// Recomputed on demand; never maintained incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Total number of tasks.
    pub total_tasks: u32,
    /// Tasks with status `done`.
    pub completed_tasks: u32,
    /// Rounded completion percentage; 0 when there are no tasks.
    pub progress_percentage: u32,
    /// Sum of estimated hours over all tasks.
    pub hours_estimated: f64,
    /// Sum of actual hours over all tasks.
    pub hours_actual: f64,
    /// Estimated minus actual. Negative when the estimate was blown.
    pub hours_remaining: f64,
    /// Number of unresolved blockers.
    pub active_blockers: u32,
    /// Counts per task type.
    pub by_type: BTreeMap<String, StatusBreakdown>,
    /// Counts per related-system name.
    pub by_system: BTreeMap<String, StatusBreakdown>,
    /// Derived health classification.
    pub project_health: ProjectHealth,
}

impl ProgressSummary {
    /// An empty summary for a project with no tasks.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_tasks: 0,
            completed_tasks: 0,
            progress_percentage: 0,
            hours_estimated: 0.0,
            hours_actual: 0.0,
            hours_remaining: 0.0,
            active_blockers: 0,
            by_type: BTreeMap::new(),
            by_system: BTreeMap::new(),
            project_health: ProjectHealth::OnTrack,
        }
    }
}

/// Scheduling defaults carried on the snapshot for downstream planners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingDefaults {
    /// Sprint length in calendar days.
    pub sprint_duration_days: u32,
    /// Working hours per day.
    pub hours_per_day: u32,
    /// Working days per week.
    pub working_days_per_week: u32,
}

impl Default for TrackingDefaults {
    fn default() -> Self {
        Self { sprint_duration_days: 14, hours_per_day: 8, working_days_per_week: 5 }
    }
}

/// The full development-tracking snapshot handed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingSnapshot {
    /// All generated tasks, in generation order.
    pub tasks: Vec<DevelopmentTask>,
    /// Sprint records; empty at generation (labels live on tasks).
    #[serde(default)]
    pub sprints: Vec<SprintRecord>,
    /// All blockers, resolved and unresolved.
    #[serde(default)]
    pub blockers: Vec<Blocker>,
    /// Rollup counters as of `last_updated`.
    pub progress: ProgressSummary,
    /// Sprint length in calendar days.
    pub default_sprint_duration: u32,
    /// Working hours per day.
    pub hours_per_day: u32,
    /// Working days per week.
    pub working_days_per_week: u32,
    /// Whether the one-shot generation run has happened.
    pub tasks_generated: bool,
    /// When generation ran.
    #[serde(default)]
    pub tasks_generated_at: Option<DateTime<Utc>>,
    /// Who triggered generation.
    pub tasks_generated_by: String,
    /// When the snapshot was last mutated.
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_planning_conventions() {
        let defaults = TrackingDefaults::default();
        assert_eq!(defaults.sprint_duration_days, 14);
        assert_eq!(defaults.hours_per_day, 8);
        assert_eq!(defaults.working_days_per_week, 5);
    }

    #[test]
    fn empty_summary_is_on_track_at_zero_percent() {
        let summary = ProgressSummary::empty();
        assert_eq!(summary.progress_percentage, 0);
        assert_eq!(summary.project_health, ProjectHealth::OnTrack);
    }

    #[test]
    fn health_labels_and_colors() {
        assert_eq!(ProjectHealth::OnTrack.color(), "green");
        assert_eq!(ProjectHealth::AtRisk.color(), "yellow");
        assert_eq!(ProjectHealth::Behind.color(), "red");
        assert_eq!(ProjectHealth::Behind.label(), "behind");
    }
}
