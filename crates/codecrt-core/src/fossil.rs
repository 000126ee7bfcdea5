//! Legacy-code ("fossil") analysis report.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub fix: String,
}

/// Structured report returned by the analyzer, field names as the model
/// writes them (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FossilReport {
    pub language: String,
    pub era: String,
    #[serde(default)]
    pub lines_of_code: u32,
    #[serde(default)]
    pub complexity: String,
    pub summary: String,
    #[serde(default)]
    pub purpose: String,
    /// Python translation of the legacy source
    #[serde(default)]
    pub modern_code: String,
    #[serde(default)]
    pub translation_notes: String,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(default)]
    pub historical_context: String,
    #[serde(default)]
    pub migration_strategy: String,
    #[serde(default)]
    pub interesting_facts: Vec<String>,
}
