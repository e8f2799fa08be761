//! Integration flows between systems.

use serde::{Deserialize, Serialize};

use crate::model::task::Priority;
use crate::model::test_case::TestCase;

/// What starts a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TriggerSpec {
    /// Trigger kind ("webhook", "schedule", "manual", …).
    #[serde(default)]
    pub trigger_type: String,
    /// Free-text description of the trigger condition.
    #[serde(default)]
    pub description: String,
}

/// One step of a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStep {
    /// Step display name.
    pub name: String,
    /// What the step does.
    #[serde(default)]
    pub description: String,
}

/// How a flow behaves on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ErrorHandlingSpec {
    /// Strategy ("retry", "dead_letter", "notify", …).
    #[serde(default)]
    pub strategy: String,
    /// Retry attempts before giving up, where retrying applies.
    #[serde(default)]
    pub retry_count: u32,
    /// Free-text notes.
    #[serde(default)]
    pub description: String,
}

/// An integration flow between a source and a target system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationFlow {
    /// Unique entity id.
    pub id: String,
    /// Flow display name.
    pub name: String,
    /// System the flow reads from.
    #[serde(default)]
    pub source_system: String,
    /// System the flow writes to.
    #[serde(default)]
    pub target_system: String,
    /// What starts the flow.
    #[serde(default)]
    pub trigger: TriggerSpec,
    /// Ordered steps.
    #[serde(default)]
    pub steps: Vec<FlowStep>,
    /// Failure behavior.
    #[serde(default)]
    pub error_handling: ErrorHandlingSpec,
    /// The flow's own priority; carried onto its workflow task.
    #[serde(default)]
    pub priority: Priority,
    /// Test cases written by the consultant; copied onto the workflow
    /// task verbatim.
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_flow_defaults() {
        let yaml = "id: flow-1\nname: Lead sync\n";
        let flow: IntegrationFlow = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(flow.priority, Priority::Medium);
        assert!(flow.steps.is_empty());
        assert!(flow.test_cases.is_empty());
        assert_eq!(flow.error_handling.retry_count, 0);
    }

    #[test]
    fn critical_priority_parses() {
        let yaml = r"
id: flow-1
name: Lead sync
source_system: HubSpot
target_system: Salesforce
priority: critical
test_cases:
  - id: tc-1
    scenario: new lead syncs
    expected_result: lead appears in Salesforce
";
        let flow: IntegrationFlow = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(flow.priority, Priority::Critical);
        assert_eq!(flow.test_cases.len(), 1);
        assert_eq!(flow.source_system, "HubSpot");
    }
}
