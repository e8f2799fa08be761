//! Test case records attached to development tasks.

use serde::{Deserialize, Serialize};

/// Verification status of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TestCaseStatus {
    /// Not yet executed.
    #[default]
    Pending,
    /// Executed and passed.
    Passed,
    /// Executed and failed.
    Failed,
}

/// A scenario/expected-result pair used to track verification of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Unique test-case identifier.
    pub id: String,
    /// What is being exercised.
    pub scenario: String,
    /// Ordered steps to reproduce the scenario.
    #[serde(default)]
    pub steps: Vec<String>,
    /// What should happen.
    pub expected_result: String,
    /// What actually happened, once executed.
    #[serde(default)]
    pub actual_result: Option<String>,
    /// Current verification status.
    #[serde(default)]
    pub status: TestCaseStatus,
}

impl TestCase {
    /// Creates a pending test case with no steps.
    #[must_use]
    pub fn new(id: &str, scenario: &str, expected_result: &str) -> Self {
        Self {
            id: id.to_string(),
            scenario: scenario.to_string(),
            steps: Vec::new(),
            expected_result: expected_result.to_string(),
            actual_result: None,
            status: TestCaseStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_test_case_is_pending() {
        let case = TestCase::new("tc-1", "login works", "user is authenticated");
        assert_eq!(case.status, TestCaseStatus::Pending);
        assert!(case.steps.is_empty());
        assert!(case.actual_result.is_none());
    }

    #[test]
    fn status_serializes_snake_case() {
        let yaml = serde_yaml::to_string(&TestCaseStatus::Passed).unwrap();
        assert_eq!(yaml.trim(), "passed");
    }
}
