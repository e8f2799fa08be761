//! `devtrack task` subcommands.

use std::path::Path;

use crate::cli::TaskAction;
use crate::context::ServiceContext;
use crate::lifecycle::TaskUpdate;
use crate::model::{Priority, TaskStatus};
use crate::store::TrackingStore;

/// Execute a `task` action.
///
/// # Errors
///
/// Returns an error string for unknown task ids, unknown status or
/// priority labels, or store failures.
pub fn run(ctx: &ServiceContext, snapshot_path: &Path, action: &TaskAction) -> Result<(), String> {
    match action {
        TaskAction::Update { id, status, priority, estimated_hours, actual_hours, notes } => {
            let status = match status.as_deref() {
                // `blocked` is derived from blockers, never set by hand.
                Some("blocked") => {
                    return Err("status `blocked` is managed via `devtrack blocker`".to_string())
                }
                Some(label) => Some(
                    TaskStatus::parse_label(label)
                        .ok_or_else(|| format!("unknown status: {label}"))?,
                ),
                None => None,
            };
            let priority = match priority.as_deref() {
                Some(label) => Some(
                    Priority::parse_label(label)
                        .ok_or_else(|| format!("unknown priority: {label}"))?,
                ),
                None => None,
            };

            let update = TaskUpdate {
                status,
                priority,
                estimated_hours: *estimated_hours,
                actual_hours: *actual_hours,
                technical_notes: notes.clone(),
            };
            if update.is_empty() {
                return Err("nothing to update; pass at least one field flag".to_string());
            }

            let store = TrackingStore::new(ctx, snapshot_path);
            let task = store.update_task(id, &update).map_err(|e| e.to_string())?;
            println!(
                "Updated {}: {} [{} / {}]",
                task.id,
                task.title,
                task.status.label(),
                task.priority.label()
            );
            Ok(())
        }
    }
}
