//! Command dispatch and handlers.

pub mod blocker;
pub mod generate;
pub mod status;
pub mod task;
pub mod tasks;

use std::env;
use std::path::PathBuf;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// The snapshot file location comes from `DEVTRACK_FILE`, defaulting to
/// `devtrack.yaml` in the working directory; `generate --out` overrides
/// it for that run.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let snapshot_path = snapshot_path();

    match command {
        Command::Generate {
            spec,
            out,
            strict,
            force,
            sprint_duration,
            hours_per_day,
            working_days,
            generated_by,
        } => {
            let out = out.clone().unwrap_or(snapshot_path);
            let defaults = crate::model::TrackingDefaults {
                sprint_duration_days: *sprint_duration,
                hours_per_day: *hours_per_day,
                working_days_per_week: *working_days,
            };
            generate::run(&ctx, spec, &out, &defaults, generated_by, *strict, *force)
        }
        Command::Status { json } => status::run(&ctx, &snapshot_path, *json),
        Command::Tasks { sprint, status } => {
            tasks::run(&ctx, &snapshot_path, *sprint, status.as_deref())
        }
        Command::Task { action } => task::run(&ctx, &snapshot_path, action),
        Command::Blocker { action } => blocker::run(&ctx, &snapshot_path, action),
    }
}

/// Resolves the snapshot file path from the environment.
fn snapshot_path() -> PathBuf {
    env::var("DEVTRACK_FILE").map_or_else(|_| PathBuf::from("devtrack.yaml"), PathBuf::from)
}
