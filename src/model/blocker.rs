//! Blocker records describing why a task cannot proceed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How badly a blocker impedes progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Work on the task is impossible and the project date is at risk.
    Critical,
    /// Work on the task is impossible.
    High,
    /// Work is significantly slowed.
    #[default]
    Medium,
    /// Minor impediment.
    Low,
}

impl Severity {
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

    /// Parses the serialized spelling back into a severity.
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

/// An independent record describing why a task cannot proceed.
///
/// Blockers reference their task by id only; they are not embedded in
/// the task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blocker {
    /// Unique blocker identifier.
    pub id: String,
    /// The task this blocker blocks.
    pub task_id: String,
    /// What is blocking the work.
    pub description: String,
    /// How severe the impediment is.
    #[serde(default)]
    pub severity: Severity,
    /// Who reported the blocker.
    pub reported_by: String,
    /// When the blocker was reported.
    pub created_at: DateTime<Utc>,
    /// Whether the blocker has been resolved.
    #[serde(default)]
    pub resolved: bool,
    /// How it was resolved, once resolved.
    #[serde(default)]
    pub resolution: Option<String>,
    /// Who resolved it.
    #[serde(default)]
    pub resolved_by: Option<String>,
    /// When it was resolved.
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_round_trip() {
        for severity in [Severity::Critical, Severity::High, Severity::Medium, Severity::Low] {
            assert_eq!(Severity::parse_label(severity.label()), Some(severity));
        }
        assert_eq!(Severity::parse_label("catastrophic"), None);
    }

    #[test]
    fn blocker_yaml_omits_nothing_needed_by_exporters() {
        let blocker = Blocker {
            id: "b-1".into(),
            task_id: "task-001".into(),
            description: "waiting on API credentials".into(),
            severity: Severity::High,
            reported_by: "consultant".into(),
            created_at: Utc::now(),
            resolved: false,
            resolution: None,
            resolved_by: None,
            resolved_at: None,
        };
        let yaml = serde_yaml::to_string(&blocker).unwrap();
        assert!(yaml.contains("task_id: task-001"));
        assert!(yaml.contains("severity: high"));
        let parsed: Blocker = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, blocker);
    }
}
