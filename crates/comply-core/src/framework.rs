//! # Entity Store
//!
//! [`ComplianceFramework`] holds every loaded collection plus the top-level
//! metadata of a framework directory. It is populated once by the loader and
//! treated as an immutable snapshot afterwards; operations that produce new
//! records (conversion, merge) return fresh collections instead of mutating
//! the store.
//!
//! Lookups are linear scans returning `None` on a miss. Relationship queries
//! return borrowed records in load order and an empty vector when nothing
//! matches. Collections are small (hundreds of records), so no indexes are
//! maintained.

use serde::{Deserialize, Serialize};

use crate::enforcement::EnforcementAssessment;
use crate::jurisdiction::Jurisdiction;
use crate::mapping::RequirementMapping;
use crate::regulation::{RegulatedEntity, Regulation};
use crate::requirement::Requirement;
use crate::solution::Solution;
use crate::zone::ZoneAssignment;

/// Top-level descriptive metadata, persisted as `framework.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_updated: String,
}

/// The complete compliance framework: metadata and all entity collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceFramework {
    #[serde(flatten)]
    pub metadata: FrameworkMetadata,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jurisdictions: Vec<Jurisdiction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regulations: Vec<Regulation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<Requirement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regulated_entities: Vec<RegulatedEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<Solution>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zone_assignments: Vec<ZoneAssignment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<RequirementMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enforcement_assessments: Vec<EnforcementAssessment>,
}

/// Per-collection record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkStats {
    pub jurisdictions: usize,
    pub regulations: usize,
    pub requirements: usize,
    pub regulated_entities: usize,
    pub solutions: usize,
    pub zone_assignments: usize,
    pub mappings: usize,
    pub enforcement_assessments: usize,
}

impl ComplianceFramework {
    /// Create an empty framework with the given name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            metadata: FrameworkMetadata {
                name: name.into(),
                version: version.into(),
                ..FrameworkMetadata::default()
            },
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn version(&self) -> &str {
        &self.metadata.version
    }

    pub fn stats(&self) -> FrameworkStats {
        FrameworkStats {
            jurisdictions: self.jurisdictions.len(),
            regulations: self.regulations.len(),
            requirements: self.requirements.len(),
            regulated_entities: self.regulated_entities.len(),
            solutions: self.solutions.len(),
            zone_assignments: self.zone_assignments.len(),
            mappings: self.mappings.len(),
            enforcement_assessments: self.enforcement_assessments.len(),
        }
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    pub fn jurisdiction(&self, id: &str) -> Option<&Jurisdiction> {
        self.jurisdictions.iter().find(|j| j.id == id)
    }

    pub fn regulation(&self, id: &str) -> Option<&Regulation> {
        self.regulations.iter().find(|r| r.id == id)
    }

    pub fn requirement(&self, id: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.id == id)
    }

    pub fn solution(&self, id: &str) -> Option<&Solution> {
        self.solutions.iter().find(|s| s.id == id)
    }

    // -----------------------------------------------------------------------
    // Relationship queries
    // -----------------------------------------------------------------------

    /// All mappings whose `requirement_id` equals `requirement_id`.
    pub fn mappings_for_requirement(&self, requirement_id: &str) -> Vec<&RequirementMapping> {
        self.mappings
            .iter()
            .filter(|m| m.requirement_id == requirement_id)
            .collect()
    }

    /// All mappings whose `solution_id` equals `solution_id`.
    pub fn mappings_for_solution(&self, solution_id: &str) -> Vec<&RequirementMapping> {
        self.mappings
            .iter()
            .filter(|m| m.solution_id == solution_id)
            .collect()
    }

    pub fn zone_assignments_for_solution(&self, solution_id: &str) -> Vec<&ZoneAssignment> {
        self.zone_assignments
            .iter()
            .filter(|za| za.solution_id == solution_id)
            .collect()
    }

    pub fn zone_assignments_for_jurisdiction(&self, jurisdiction_id: &str) -> Vec<&ZoneAssignment> {
        self.zone_assignments
            .iter()
            .filter(|za| za.jurisdiction_id == jurisdiction_id)
            .collect()
    }

    pub fn requirements_by_regulation(&self, regulation_id: &str) -> Vec<&Requirement> {
        self.requirements
            .iter()
            .filter(|r| r.regulation_id == regulation_id)
            .collect()
    }

    pub fn enforcement_assessments_for_jurisdiction(
        &self,
        jurisdiction_id: &str,
    ) -> Vec<&EnforcementAssessment> {
        self.enforcement_assessments
            .iter()
            .filter(|ea| ea.jurisdiction_id == jurisdiction_id)
            .collect()
    }
}
