//! `devtrack status` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::engine::progress;
use crate::store::TrackingStore;

/// Execute the `status` command.
///
/// Recomputes the rollup from the live task list and prints totals,
/// hours, health, and the per-type/per-system breakdowns.
///
/// # Errors
///
/// Returns an error string if the snapshot cannot be loaded.
pub fn run(ctx: &ServiceContext, snapshot_path: &Path, json: bool) -> Result<(), String> {
    let store = TrackingStore::new(ctx, snapshot_path);
    if !store.exists() {
        println!("No tracking snapshot found. Run `devtrack generate` first.");
        return Ok(());
    }
    let snapshot = store.load().map_err(|e| e.to_string())?;

    // Progress is derived on demand, not trusted from the file.
    let summary = progress::aggregate(&snapshot.tasks, &snapshot.blockers);

    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "{} of {} task(s) done ({}%) — {} [{}]",
        summary.completed_tasks,
        summary.total_tasks,
        summary.progress_percentage,
        summary.project_health.label(),
        summary.project_health.color(),
    );
    println!(
        "Hours: {:.1} estimated, {:.1} actual, {:.1} remaining",
        summary.hours_estimated, summary.hours_actual, summary.hours_remaining
    );
    if summary.active_blockers > 0 {
        println!("Active blockers: {}", summary.active_blockers);
    }

    print_breakdown("BY TYPE", &summary.by_type);
    print_breakdown("BY SYSTEM", &summary.by_system);
    Ok(())
}

fn print_breakdown(
    heading: &str,
    breakdown: &std::collections::BTreeMap<String, crate::model::StatusBreakdown>,
) {
    if breakdown.is_empty() {
        return;
    }
    let name_width =
        breakdown.keys().map(String::len).max().unwrap_or(4).max(heading.len());

    println!("\n{heading:<name_width$}  {:>5}  {:>4}  {:>11}", "TOTAL", "DONE", "IN PROGRESS");
    for (name, counts) in breakdown {
        println!(
            "{name:<name_width$}  {:>5}  {:>4}  {:>11}",
            counts.total, counts.done, counts.in_progress
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::model::TrackingDefaults;
    use crate::spec::{AuthConfig, Specification, SystemSpec};

    #[test]
    fn status_without_snapshot_is_ok() {
        let ctx = ServiceContext::deterministic();
        let result = run(&ctx, Path::new("/devtrack/nonexistent/devtrack.yaml"), false);
        assert!(result.is_ok());
    }

    #[test]
    fn status_with_snapshot_is_ok() {
        let dir = std::env::temp_dir().join("devtrack_cmd_status_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("devtrack.yaml");

        let ctx = ServiceContext::deterministic();
        let spec = Specification {
            systems: vec![SystemSpec {
                id: "sys-1".into(),
                name: "HubSpot".into(),
                auth: AuthConfig::default(),
                modules: Vec::new(),
                migration: None,
            }],
            ..Specification::default()
        };
        let outcome = engine::generate(
            &spec,
            &TrackingDefaults::default(),
            "consultant",
            ctx.clock.now(),
            false,
        )
        .unwrap();
        TrackingStore::new(&ctx, &path).initialize(&outcome.snapshot, false).unwrap();

        let result = run(&ctx, &path, false);
        assert!(result.is_ok());
        let result = run(&ctx, &path, true);
        assert!(result.is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
