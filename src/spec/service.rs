//! Purchased service entries.
//!
//! Each entry carries a category plus the tag fields the effort tables
//! key on. Tags stay plain strings on purpose: an unknown tag falls
//! into the table's `else` bucket instead of failing to parse.

use serde::{Deserialize, Serialize};

/// The five purchasable service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Workflow automation.
    Automation,
    /// A packaged AI agent.
    AiAgent,
    /// A packaged integration.
    Integration,
    /// A packaged system implementation.
    SystemImplementation,
    /// Anything else sold alongside.
    Additional,
}

/// A purchased service entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Unique entity id.
    pub id: String,
    /// Service display name.
    pub name: String,
    /// Which of the five categories this entry falls into.
    pub category: ServiceCategory,
    /// Automation sub-category tag ("lead_management", "crm_sync", …).
    #[serde(default)]
    pub automation_category: String,
    /// Complexity tag ("complex", "medium", …).
    #[serde(default)]
    pub complexity: String,
    /// Scope tag ("enterprise", "multi_department", …).
    #[serde(default)]
    pub scope: String,
    /// Module count for system-implementation entries.
    #[serde(default)]
    pub module_count: u32,
}
