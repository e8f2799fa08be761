//! Task and blocker lifecycle: the state machine behind status edits.
//!
//! Statuses move `todo -> in_progress -> in_review -> done` as free-form
//! edits; `blocked` is never set by hand. [`sync_blocked_status`] is the
//! single authoritative function that derives it from the blocker set,
//! so a task is `blocked` exactly while an unresolved blocker references
//! it (and returns to `todo` on full unblock).

use chrono::{DateTime, Utc};

use crate::model::blocker::{Blocker, Severity};
use crate::model::task::{DevelopmentTask, Priority, TaskStatus};

/// A partial edit to a task. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    /// New status.
    pub status: Option<TaskStatus>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New estimated hours.
    pub estimated_hours: Option<f64>,
    /// New actual hours.
    pub actual_hours: Option<f64>,
    /// New technical notes (replaces, does not append).
    pub technical_notes: Option<String>,
}

impl TaskUpdate {
    /// Returns `true` if the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.estimated_hours.is_none()
            && self.actual_hours.is_none()
            && self.technical_notes.is_none()
    }
}

/// Applies a partial edit and bumps `updated_at`.
///
/// No transition-validity checking is done between the free-form
/// statuses; any of them may be set directly.
pub fn apply_update(task: &mut DevelopmentTask, update: &TaskUpdate, now: DateTime<Utc>) {
    if let Some(status) = update.status {
        task.status = status;
    }
    if let Some(priority) = update.priority {
        task.priority = priority;
    }
    if let Some(hours) = update.estimated_hours {
        task.estimated_hours = hours;
    }
    if let Some(hours) = update.actual_hours {
        task.actual_hours = hours;
    }
    if let Some(notes) = &update.technical_notes {
        task.technical_notes.clone_from(notes);
    }
    task.updated_at = now;
}

/// Creates an unresolved blocker for a task.
#[must_use]
pub fn new_blocker(
    id: &str,
    task_id: &str,
    description: &str,
    severity: Severity,
    reported_by: &str,
    now: DateTime<Utc>,
) -> Blocker {
    Blocker {
        id: id.to_string(),
        task_id: task_id.to_string(),
        description: description.to_string(),
        severity,
        reported_by: reported_by.to_string(),
        created_at: now,
        resolved: false,
        resolution: None,
        resolved_by: None,
        resolved_at: None,
    }
}

/// Marks a blocker resolved with resolution text, resolver, and time.
pub fn resolve_blocker(
    blocker: &mut Blocker,
    resolution: &str,
    resolved_by: &str,
    now: DateTime<Utc>,
) {
    blocker.resolved = true;
    blocker.resolution = Some(resolution.to_string());
    blocker.resolved_by = Some(resolved_by.to_string());
    blocker.resolved_at = Some(now);
}

/// Recomputes a task's blocked status from the full blocker list.
///
/// Call after every blocker mutation. A done task is terminal and is
/// never demoted; otherwise the task is `blocked` while any unresolved
/// blocker references it, and drops back to `todo` when the last one
/// resolves.
pub fn sync_blocked_status(task: &mut DevelopmentTask, blockers: &[Blocker], now: DateTime<Utc>) {
    let has_unresolved = blockers.iter().any(|b| b.task_id == task.id && !b.resolved);

    let next = if has_unresolved {
        if task.status == TaskStatus::Done {
            return;
        }
        TaskStatus::Blocked
    } else if task.status == TaskStatus::Blocked {
        TaskStatus::Todo
    } else {
        return;
    };

    if next != task.status {
        task.status = next;
        task.updated_at = now;
    }
}
