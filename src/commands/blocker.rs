//! `devtrack blocker` subcommands.

use std::path::Path;

use crate::cli::BlockerAction;
use crate::context::ServiceContext;
use crate::model::Severity;
use crate::store::TrackingStore;

/// Execute a `blocker` action.
///
/// # Errors
///
/// Returns an error string for unknown task or blocker ids, unknown
/// severity labels, or store failures.
pub fn run(
    ctx: &ServiceContext,
    snapshot_path: &Path,
    action: &BlockerAction,
) -> Result<(), String> {
    let store = TrackingStore::new(ctx, snapshot_path);
    match action {
        BlockerAction::Add { task_id, description, severity, reporter } => {
            let severity = Severity::parse_label(severity)
                .ok_or_else(|| format!("unknown severity: {severity}"))?;
            let blocker = store
                .add_blocker(task_id, description, severity, reporter)
                .map_err(|e| e.to_string())?;
            println!(
                "Reported blocker {} on {} ({}): {}",
                blocker.id,
                blocker.task_id,
                blocker.severity.label(),
                blocker.description
            );
            Ok(())
        }
        BlockerAction::Resolve { id, resolution, resolver } => {
            let blocker =
                store.resolve_blocker(id, resolution, resolver).map_err(|e| e.to_string())?;
            println!("Resolved blocker {} on {}: {resolution}", blocker.id, blocker.task_id);
            Ok(())
        }
    }
}
