//! The generation pipeline: specification in, tracking snapshot out.
//!
//! Runs exactly once per project, when the specification is judged
//! complete enough to start development tracking. The pipeline is pure
//! in-memory computation: the factory emits the flat task list, the
//! resolver adds edges in place, the allocator assigns sprints in
//! place, and the aggregator seeds the summary counters.

pub mod factory;
pub mod progress;
pub mod resolver;
pub mod sprint;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::TrackError;
use crate::model::tracking::{TrackingDefaults, TrackingSnapshot};
use crate::spec::Specification;

use factory::TaskFactory;

/// Result of one generation run.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// The seeded tracking snapshot.
    pub snapshot: TrackingSnapshot,
    /// Dependency cycles found after edge resolution. Empty in
    /// practice for factory-emitted graphs; reported, never repaired.
    pub cycles: Vec<Vec<String>>,
}

/// Generates the development-tracking snapshot from a specification.
///
/// With `strict` set, a detected dependency cycle aborts generation;
/// otherwise cycles are logged and left in the output.
///
/// # Errors
///
/// Returns [`TrackError::InvalidSpecification`] when an entity has an
/// empty id or name, and [`TrackError::CyclicDependency`] in strict
/// mode when the resolved graph contains a cycle.
pub fn generate(
    spec: &Specification,
    defaults: &TrackingDefaults,
    generated_by: &str,
    now: DateTime<Utc>,
    strict: bool,
) -> Result<GenerationOutcome, TrackError> {
    validate(spec)?;
    debug!(entities = spec.entity_count(), "starting generation run");

    let mut tasks = TaskFactory::new(now, generated_by).generate(spec);
    resolver::link_dependencies(&mut tasks);

    let cycles = resolver::detect_cycles(&tasks);
    for cycle in &cycles {
        warn!(cycle = cycle.join(" -> "), "dependency cycle in generated graph");
    }
    if strict {
        if let Some(cycle) = cycles.first() {
            return Err(TrackError::CyclicDependency { cycle: cycle.join(" -> ") });
        }
    }

    sprint::allocate(&mut tasks);
    let summary = progress::aggregate(&tasks, &[]);

    let snapshot = TrackingSnapshot {
        tasks,
        sprints: Vec::new(),
        blockers: Vec::new(),
        progress: summary,
        default_sprint_duration: defaults.sprint_duration_days,
        hours_per_day: defaults.hours_per_day,
        working_days_per_week: defaults.working_days_per_week,
        tasks_generated: true,
        tasks_generated_at: Some(now),
        tasks_generated_by: generated_by.to_string(),
        last_updated: now,
    };

    Ok(GenerationOutcome { snapshot, cycles })
}

/// Rejects structurally broken entities. Sparse fields are fine — they
/// default — but an entity without an id or a name cannot be referenced
/// back from its tasks.
fn validate(spec: &Specification) -> Result<(), TrackError> {
    let mut check = |id: &str, name: &str, what: &str| -> Result<(), TrackError> {
        if id.trim().is_empty() {
            return Err(TrackError::InvalidSpecification {
                reason: format!("{what} with empty id"),
            });
        }
        if name.trim().is_empty() {
            return Err(TrackError::InvalidSpecification {
                reason: format!("{what} {id} has an empty name"),
            });
        }
        Ok(())
    };

    for system in &spec.systems {
        check(&system.id, &system.name, "system")?;
    }
    for flow in &spec.integration_flows {
        check(&flow.id, &flow.name, "integration flow")?;
    }
    for agent in &spec.ai_agents {
        check(&agent.id, &agent.name, "ai agent")?;
    }
    for entry in &spec.service_entries {
        check(&entry.id, &entry.name, "service entry")?;
    }
    Ok(())
}
