//! `devtrack tasks` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::model::TaskStatus;
use crate::store::TrackingStore;

/// Execute the `tasks` command.
///
/// Displays a table of tasks (id, title, type, status, sprint, hours),
/// optionally filtered by sprint number or status.
///
/// # Errors
///
/// Returns an error string if the snapshot cannot be loaded or the
/// status filter is not a known status.
pub fn run(
    ctx: &ServiceContext,
    snapshot_path: &Path,
    sprint: Option<u32>,
    status: Option<&str>,
) -> Result<(), String> {
    let status_filter = match status {
        Some(label) => Some(
            TaskStatus::parse_label(label)
                .ok_or_else(|| format!("unknown status: {label}"))?,
        ),
        None => None,
    };

    let store = TrackingStore::new(ctx, snapshot_path);
    if !store.exists() {
        println!("No tracking snapshot found. Run `devtrack generate` first.");
        return Ok(());
    }
    let snapshot = store.load().map_err(|e| e.to_string())?;

    let mut rows: Vec<(String, String, String, String, String, String)> = Vec::new();
    for task in &snapshot.tasks {
        if sprint.is_some() && task.sprint_number != sprint {
            continue;
        }
        if status_filter.is_some_and(|s| task.status != s) {
            continue;
        }
        rows.push((
            task.id.clone(),
            task.title.clone(),
            task.task_type.label().to_string(),
            task.status.label().to_string(),
            task.sprint.clone().unwrap_or_else(|| "-".to_string()),
            format!("{:.0}h", task.estimated_hours),
        ));
    }

    if rows.is_empty() {
        println!("No matching tasks.");
        return Ok(());
    }

    let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(2).max(2);
    let title_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(5).max(5);
    let type_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(4).max(4);
    let status_width = rows.iter().map(|r| r.3.len()).max().unwrap_or(6).max(6);
    let sprint_width = rows.iter().map(|r| r.4.len()).max().unwrap_or(6).max(6);

    println!(
        "{:<id_width$}  {:<title_width$}  {:<type_width$}  {:<status_width$}  {:<sprint_width$}  {:>5}",
        "ID", "TITLE", "TYPE", "STATUS", "SPRINT", "EST",
    );
    println!(
        "{:-<id_width$}  {:-<title_width$}  {:-<type_width$}  {:-<status_width$}  {:-<sprint_width$}  {:-<5}",
        "", "", "", "", "", "",
    );
    for (id, title, task_type, status, sprint, est) in &rows {
        println!(
            "{id:<id_width$}  {title:<title_width$}  {task_type:<type_width$}  {status:<status_width$}  {sprint:<sprint_width$}  {est:>5}",
        );
    }
    println!("\n{} task(s).", rows.len());
    Ok(())
}
