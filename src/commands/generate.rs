//! `devtrack generate` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::engine;
use crate::model::TrackingDefaults;
use crate::spec::Specification;
use crate::store::TrackingStore;

/// Execute the `generate` command: read the specification, run the
/// generation pipeline, and persist the seeded snapshot.
///
/// # Errors
///
/// Returns an error string if the specification cannot be read or
/// parsed, the pipeline rejects it, or the snapshot cannot be written.
#[allow(clippy::too_many_arguments)]
pub fn run(
    ctx: &ServiceContext,
    spec_path: &Path,
    out: &Path,
    defaults: &TrackingDefaults,
    generated_by: &str,
    strict: bool,
    force: bool,
) -> Result<(), String> {
    let contents = ctx
        .fs
        .read_to_string(spec_path)
        .map_err(|e| format!("Failed to read specification {}: {e}", spec_path.display()))?;
    let spec: Specification = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse specification {}: {e}", spec_path.display()))?;

    let outcome = engine::generate(&spec, defaults, generated_by, ctx.clock.now(), strict)
        .map_err(|e| e.to_string())?;

    let store = TrackingStore::new(ctx, out);
    store.initialize(&outcome.snapshot, force).map_err(|e| e.to_string())?;

    let snapshot = &outcome.snapshot;
    let sprint_count =
        snapshot.tasks.iter().filter_map(|t| t.sprint_number).max().unwrap_or(0);
    println!(
        "Generated {} task(s) across {} sprint(s) ({:.0} estimated hours).",
        snapshot.tasks.len(),
        sprint_count,
        snapshot.progress.hours_estimated
    );
    for cycle in &outcome.cycles {
        println!("Warning: dependency cycle: {}", cycle.join(" -> "));
    }
    println!("Snapshot written to {}.", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC_YAML: &str = r"
systems:
  - id: sys-1
    name: HubSpot
    auth:
      method: oauth2
    modules:
      - name: Contacts
integration_flows:
  - id: flow-1
    name: Lead sync
    source_system: HubSpot
    target_system: Sheets
";

    #[test]
    fn generate_writes_snapshot_file() {
        let dir = std::env::temp_dir().join("devtrack_cmd_generate_test");
        std::fs::create_dir_all(&dir).unwrap();
        let spec_path = dir.join("spec.yaml");
        let out = dir.join("devtrack.yaml");
        std::fs::write(&spec_path, SPEC_YAML).unwrap();

        let ctx = ServiceContext::deterministic();
        run(&ctx, &spec_path, &out, &TrackingDefaults::default(), "consultant", false, false)
            .unwrap();

        let store = TrackingStore::new(&ctx, &out);
        let snapshot = store.load().unwrap();
        assert!(snapshot.tasks_generated);
        assert!(snapshot.tasks.len() >= 7);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn second_generate_fails_without_force() {
        let dir = std::env::temp_dir().join("devtrack_cmd_generate_guard_test");
        std::fs::create_dir_all(&dir).unwrap();
        let spec_path = dir.join("spec.yaml");
        let out = dir.join("devtrack.yaml");
        std::fs::write(&spec_path, SPEC_YAML).unwrap();

        let ctx = ServiceContext::deterministic();
        let defaults = TrackingDefaults::default();
        run(&ctx, &spec_path, &out, &defaults, "consultant", false, false).unwrap();

        let err =
            run(&ctx, &spec_path, &out, &defaults, "consultant", false, false).unwrap_err();
        assert!(err.contains("already generated"));

        run(&ctx, &spec_path, &out, &defaults, "consultant", false, true).unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_spec_reports_path() {
        let ctx = ServiceContext::deterministic();
        let err = run(
            &ctx,
            Path::new("/devtrack/missing-spec.yaml"),
            Path::new("/tmp/devtrack_unused.yaml"),
            &TrackingDefaults::default(),
            "consultant",
            false,
            false,
        )
        .unwrap_err();
        assert!(err.contains("missing-spec.yaml"));
    }
}
