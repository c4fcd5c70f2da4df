//! # Requirements
//!
//! A requirement is a single obligation extracted from a regulation
//! (e.g. "essential data must be stored inside the EU"). Requirements are the
//! rows of the coverage matrix and the `controlId` targets of research
//! findings.

use serde::{Deserialize, Serialize};

use crate::external_ref::ExternalRef;

/// Severity of a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementSeverity {
    Critical,
    High,
    Medium,
    Low,
}

wire_enum!(RequirementSeverity, "severity", {
    Critical => "critical",
    High => "high",
    Medium => "medium",
    Low => "low",
});

/// A specific compliance requirement from a regulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirement {
    /// Identifier, e.g. "NIS2-ART21-SEC-01".
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub regulation_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub section_id: String,
    /// e.g. "data-residency", "encryption".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subcategory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<RequirementSeverity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Related requirement identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effective_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicability: Option<Applicability>,
}

impl Requirement {
    /// Create a requirement with only the required fields populated.
    pub fn new(id: impl Into<String>, regulation_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            regulation_id: regulation_id.into(),
            section_id: String::new(),
            category: String::new(),
            subcategory: String::new(),
            severity: None,
            keywords: Vec::new(),
            related_ids: Vec::new(),
            external_refs: Vec::new(),
            effective_date: String::new(),
            applicability: None,
        }
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: RequirementSeverity) -> Self {
        self.severity = Some(severity);
        self
    }
}

/// When a requirement applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicability {
    /// e.g. "essential-entity", "important-entity".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sectors: Vec<String>,
    /// e.g. "personal-data", "essential-data".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub conditions: String,
}
