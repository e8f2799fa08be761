//! The implementation specification — the read-only input to generation.
//!
//! These types mirror what the data-entry forms produce. Missing fields
//! default rather than fail: the generation pipeline never rejects a
//! specification for being sparse, only for being structurally broken
//! (empty entity ids or names).

pub mod agent;
pub mod integration;
pub mod service;
pub mod system;

use serde::{Deserialize, Serialize};

pub use agent::{AgentSpec, TrainingExample};
pub use integration::{ErrorHandlingSpec, FlowStep, IntegrationFlow, TriggerSpec};
pub use service::{ServiceCategory, ServiceEntry};
pub use system::{AuthConfig, DataMigration, FieldMapping, ModuleSpec, SystemSpec};

/// The full implementation specification handed over by the forms layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Specification {
    /// Systems to integrate.
    #[serde(default)]
    pub systems: Vec<SystemSpec>,
    /// Integration flows between systems.
    #[serde(default)]
    pub integration_flows: Vec<IntegrationFlow>,
    /// AI agents to configure.
    #[serde(default)]
    pub ai_agents: Vec<AgentSpec>,
    /// Purchased service entries.
    #[serde(default)]
    pub service_entries: Vec<ServiceEntry>,
}

impl Specification {
    /// Returns `true` if an entity with the given id exists anywhere in
    /// the specification.
    #[must_use]
    pub fn contains_entity(&self, id: &str) -> bool {
        self.systems.iter().any(|s| s.id == id)
            || self.integration_flows.iter().any(|f| f.id == id)
            || self.ai_agents.iter().any(|a| a.id == id)
            || self.service_entries.iter().any(|e| e.id == id)
    }

    /// Total number of entities across all collections.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.systems.len()
            + self.integration_flows.len()
            + self.ai_agents.len()
            + self.service_entries.len()
    }
}
