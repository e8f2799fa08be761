//! AI agent specifications.

use serde::{Deserialize, Serialize};

/// A sample conversation used to train and test an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// What the user says.
    pub user_message: String,
    /// What the agent should answer.
    #[serde(default)]
    pub expected_response: String,
}

/// An AI agent to configure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Unique entity id.
    pub id: String,
    /// Agent display name.
    pub name: String,
    /// Knowledge-base sources (URLs, document names).
    #[serde(default)]
    pub knowledge_sources: Vec<String>,
    /// Ordered conversation-flow step descriptions.
    #[serde(default)]
    pub conversation_flow: Vec<String>,
    /// Whether the agent reads/writes the CRM.
    #[serde(default)]
    pub crm_integration: bool,
    /// Whether the agent sends email.
    #[serde(default)]
    pub email_integration: bool,
    /// Whether the agent manages calendars.
    #[serde(default)]
    pub calendar_integration: bool,
    /// Sample conversations for training and testing.
    #[serde(default)]
    pub training_examples: Vec<TrainingExample>,
}
