//! The development task — the unit of work produced by generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::test_case::TestCase;

/// Category of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Connecting a system: authentication, module wiring.
    Integration,
    /// Moving or mapping data between systems.
    Migration,
    /// Building an integration flow and its error handling.
    Workflow,
    /// AI-agent configuration work.
    AiAgent,
    /// Verification work (end-to-end tests, agent training runs).
    Testing,
    /// Shipping to production.
    Deployment,
    /// Documentation and handoff.
    Documentation,
    /// Purchased automation service delivery.
    ServiceImplementation,
    /// Purchased system-implementation service delivery.
    SystemImplementation,
    /// Purchased additional service delivery.
    AdditionalService,
}

impl TaskType {
    /// Human-readable label matching the serialized spelling.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Integration => "integration",
            Self::Migration => "migration",
            Self::Workflow => "workflow",
            Self::AiAgent => "ai_agent",
            Self::Testing => "testing",
            Self::Deployment => "deployment",
            Self::Documentation => "documentation",
            Self::ServiceImplementation => "service_implementation",
            Self::SystemImplementation => "system_implementation",
            Self::AdditionalService => "additional_service",
        }
    }
}

/// Which part of an entity's build a task covers.
///
/// Phases give the dependency resolver exact join keys instead of the
/// title-substring matching the original tracking tool relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPhase {
    /// System authentication setup.
    Auth,
    /// System module implementation.
    Module,
    /// Field mapping for a module.
    FieldMapping,
    /// Data migration into a system.
    Migration,
    /// Integration-flow build.
    Workflow,
    /// Integration-flow error handling.
    ErrorHandling,
    /// Agent knowledge-base setup.
    KnowledgeBase,
    /// Agent conversation-flow design.
    ConversationFlow,
    /// Agent CRM integration.
    CrmIntegration,
    /// Agent training and testing.
    Training,
    /// Purchased service delivery.
    Service,
    /// The per-run end-to-end integration test.
    EndToEnd,
    /// The per-run production deployment.
    Deployment,
    /// The per-run documentation/handoff.
    Documentation,
}

/// Kind of specification entity a task originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecEntityKind {
    /// A system to integrate.
    System,
    /// An integration flow.
    IntegrationFlow,
    /// An AI agent.
    AiAgent,
    /// A purchased service entry.
    ServiceEntry,
    /// The project itself (per-run constant tasks).
    Project,
}

/// Typed back-reference from a task to its originating entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRef {
    /// Entity kind.
    pub kind: SpecEntityKind,
    /// Entity id within the specification.
    pub spec_id: String,
    /// Entity display name.
    pub name: String,
    /// Owning system name, where the entity belongs to one.
    ///
    /// Set for system-derived tasks and for flow tasks (the flow's
    /// source system); `None` for agents, services, and per-run tasks.
    #[serde(default)]
    pub system: Option<String>,
}

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Todo,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    InReview,
    /// Finished. Terminal: a done task is never demoted to blocked.
    Done,
    /// Stopped by at least one unresolved blocker.
    Blocked,
}

impl TaskStatus {
    /// Human-readable label matching the serialized spelling.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }

    /// Parses the serialized spelling back into a status.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "todo" => Some(Self::Todo),
            "in_progress" => Some(Self::InProgress),
            "in_review" => Some(Self::InReview),
            "done" => Some(Self::Done),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Must happen before anything ships.
    Critical,
    /// Core path work.
    High,
    /// Normal work.
    #[default]
    Medium,
    /// Nice to have.
    Low,
}

impl Priority {
    /// Human-readable label matching the serialized spelling.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parses the serialized spelling back into a priority.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// A generated unit of work.
///
/// `dependencies` and `blocks_other_tasks` are mutual inverses: if task
/// A lists B in `dependencies`, B lists A in `blocks_other_tasks`. The
/// resolver maintains this at construction; lifecycle edits never touch
/// the edge sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentTask {
    /// Unique task identifier (`task-001`, `task-002`, …).
    pub id: String,
    /// Short human-readable title.
    pub title: String,
    /// Free-text description of the work.
    pub description: String,
    /// Category of work.
    pub task_type: TaskType,
    /// Which part of the entity's build this covers.
    pub phase: TaskPhase,
    /// Back-reference to the originating specification entity.
    pub related_spec: SpecRef,
    /// Current workflow status.
    #[serde(default)]
    pub status: TaskStatus,
    /// Priority.
    #[serde(default)]
    pub priority: Priority,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Actual effort spent in hours.
    #[serde(default)]
    pub actual_hours: f64,
    /// Ids of tasks that must complete before this one.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Ids of tasks that cannot complete before this one.
    #[serde(default)]
    pub blocks_other_tasks: Vec<String>,
    /// Whether this task carries test cases that must pass.
    #[serde(default)]
    pub testing_required: bool,
    /// Attached test cases.
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    /// Sprint label (`"Sprint 3"`), assigned by the allocator.
    #[serde(default)]
    pub sprint: Option<String>,
    /// Numeric sprint index, assigned by the allocator.
    #[serde(default)]
    pub sprint_number: Option<u32>,
    /// Free-text technical notes.
    #[serde(default)]
    pub technical_notes: String,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
    /// Who (or what) created the task.
    pub created_by: String,
}

impl DevelopmentTask {
    /// The system-name bucket this task rolls up under in progress
    /// breakdowns: the owning system where there is one, otherwise the
    /// related entity's own name.
    #[must_use]
    pub fn system_bucket(&self) -> &str {
        self.related_spec.system.as_deref().unwrap_or(&self.related_spec.name)
    }
}
