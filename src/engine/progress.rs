//! Progress aggregator: pure rollup over the task and blocker lists.

use std::collections::BTreeMap;

use crate::model::blocker::Blocker;
use crate::model::task::{DevelopmentTask, TaskStatus};
use crate::model::tracking::{ProgressSummary, ProjectHealth, StatusBreakdown};

/// Number of active blockers above which the project is behind.
const BLOCKER_TOLERANCE: u32 = 3;
/// Completion percentage below which a large project is at risk.
const AT_RISK_PERCENTAGE: u32 = 30;
/// Task count above which the at-risk rule applies.
const AT_RISK_MIN_TASKS: u32 = 10;

/// Derives the rollup counters from the current task and blocker lists.
///
/// Pure function, recomputed on demand; consumers must not cache it
/// across mutations.
#[must_use]
pub fn aggregate(tasks: &[DevelopmentTask], blockers: &[Blocker]) -> ProgressSummary {
    let total_tasks = u32::try_from(tasks.len()).unwrap_or(u32::MAX);
    let completed_tasks =
        u32::try_from(tasks.iter().filter(|t| t.status == TaskStatus::Done).count())
            .unwrap_or(u32::MAX);

    // Defined as 0 for an empty task list rather than NaN.
    let progress_percentage = if total_tasks == 0 {
        0
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (f64::from(completed_tasks) / f64::from(total_tasks) * 100.0).round() as u32
        }
    };

    let hours_estimated: f64 = tasks.iter().map(|t| t.estimated_hours).sum();
    let hours_actual: f64 = tasks.iter().map(|t| t.actual_hours).sum();
    // Deliberately unclamped: a blown estimate shows up as negative.
    let hours_remaining = hours_estimated - hours_actual;

    let mut by_type: BTreeMap<String, StatusBreakdown> = BTreeMap::new();
    let mut by_system: BTreeMap<String, StatusBreakdown> = BTreeMap::new();
    for task in tasks {
        bump(by_type.entry(task.task_type.label().to_string()).or_default(), task.status);
        bump(by_system.entry(task.system_bucket().to_string()).or_default(), task.status);
    }

    let active_blockers =
        u32::try_from(blockers.iter().filter(|b| !b.resolved).count()).unwrap_or(u32::MAX);

    // Order matters: blockers dominate the percentage rule.
    let project_health = if active_blockers > BLOCKER_TOLERANCE {
        ProjectHealth::Behind
    } else if progress_percentage < AT_RISK_PERCENTAGE && total_tasks > AT_RISK_MIN_TASKS {
        ProjectHealth::AtRisk
    } else {
        ProjectHealth::OnTrack
    };

    ProgressSummary {
        total_tasks,
        completed_tasks,
        progress_percentage,
        hours_estimated,
        hours_actual,
        hours_remaining,
        active_blockers,
        by_type,
        by_system,
        project_health,
    }
}

fn bump(breakdown: &mut StatusBreakdown, status: TaskStatus) {
    breakdown.total += 1;
    match status {
        TaskStatus::Done => breakdown.done += 1,
        TaskStatus::InProgress => breakdown.in_progress += 1,
        _ => {}
    }
}
