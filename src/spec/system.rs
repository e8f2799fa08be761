//! Systems to integrate: authentication, modules, data migration.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Authentication configuration for a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authentication method ("oauth2", "api_key", …).
    #[serde(default)]
    pub method: String,
    /// Whether authentication setup work is needed at all.
    #[serde(default = "default_true")]
    pub required: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { method: String::new(), required: true }
    }
}

/// A single field mapping inside a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Source field name.
    #[serde(default)]
    pub source: String,
    /// Target field name.
    #[serde(default)]
    pub target: String,
}

/// A functional module of a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Module display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Whether this module needs its data fields mapped.
    #[serde(default)]
    pub requires_field_mapping: bool,
    /// The fields to map, when mapping is required.
    #[serde(default)]
    pub fields: Vec<FieldMapping>,
}

/// Data-migration descriptor for a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DataMigration {
    /// Whether migration work is needed.
    #[serde(default)]
    pub required: bool,
    /// Where the data comes from.
    #[serde(default)]
    pub source: String,
    /// Free-text notes on volume, cleansing, cutover.
    #[serde(default)]
    pub notes: String,
}

/// A system to integrate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSpec {
    /// Unique entity id.
    pub id: String,
    /// System display name.
    pub name: String,
    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Modules to implement.
    #[serde(default)]
    pub modules: Vec<ModuleSpec>,
    /// Optional data-migration descriptor.
    #[serde(default)]
    pub migration: Option<DataMigration>,
}
