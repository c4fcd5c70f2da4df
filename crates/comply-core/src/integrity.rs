//! # Referential Integrity
//!
//! Dangling identifier references inside a loaded framework. A framework
//! with dangling references still loads; this module reports them so the
//! caller can decide whether they are blocking.
//!
//! Checked references, in report order:
//!
//! 1. requirement `regulationId` → regulations (skipped when empty)
//! 2. mapping `solutionId` → solutions, then `requirementId` → requirements
//! 3. zone assignment `solutionId` → solutions, then `jurisdictionId` → jurisdictions

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::framework::ComplianceFramework;

/// The kind of record that holds a dangling reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Requirement,
    Mapping,
    ZoneAssignment,
}

impl RecordKind {
    fn label(&self) -> &'static str {
        match self {
            RecordKind::Requirement => "Requirement",
            RecordKind::Mapping => "Mapping",
            RecordKind::ZoneAssignment => "Zone assignment",
        }
    }
}

/// One dangling reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceIssue {
    pub kind: RecordKind,
    pub record_id: String,
    /// The referencing field, e.g. "solutionId".
    pub field: &'static str,
    pub missing_id: String,
}

impl ReferenceIssue {
    /// The kind of entity the field was expected to reference.
    pub fn target(&self) -> &'static str {
        match self.field {
            "regulationId" => "regulation",
            "requirementId" => "requirement",
            "solutionId" => "solution",
            "jurisdictionId" => "jurisdiction",
            _ => "record",
        }
    }
}

impl fmt::Display for ReferenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} references unknown {}: {}",
            self.kind.label(),
            self.record_id,
            self.target(),
            self.missing_id
        )
    }
}

impl ComplianceFramework {
    /// Report every dangling reference in the framework.
    pub fn check_references(&self) -> Vec<ReferenceIssue> {
        let regulation_ids: HashSet<&str> = self.regulations.iter().map(|r| r.id.as_str()).collect();
        let requirement_ids: HashSet<&str> =
            self.requirements.iter().map(|r| r.id.as_str()).collect();
        let solution_ids: HashSet<&str> = self.solutions.iter().map(|s| s.id.as_str()).collect();
        let jurisdiction_ids: HashSet<&str> =
            self.jurisdictions.iter().map(|j| j.id.as_str()).collect();

        let mut issues = Vec::new();
        let mut check = |kind: RecordKind,
                         record_id: &str,
                         field: &'static str,
                         target: &str,
                         known: &HashSet<&str>| {
            if !known.contains(target) {
                issues.push(ReferenceIssue {
                    kind,
                    record_id: record_id.to_string(),
                    field,
                    missing_id: target.to_string(),
                });
            }
        };

        for req in &self.requirements {
            if !req.regulation_id.is_empty() {
                check(
                    RecordKind::Requirement,
                    &req.id,
                    "regulationId",
                    &req.regulation_id,
                    &regulation_ids,
                );
            }
        }

        for m in &self.mappings {
            check(RecordKind::Mapping, &m.id, "solutionId", &m.solution_id, &solution_ids);
            check(
                RecordKind::Mapping,
                &m.id,
                "requirementId",
                &m.requirement_id,
                &requirement_ids,
            );
        }

        for za in &self.zone_assignments {
            check(
                RecordKind::ZoneAssignment,
                &za.id,
                "solutionId",
                &za.solution_id,
                &solution_ids,
            );
            check(
                RecordKind::ZoneAssignment,
                &za.id,
                "jurisdictionId",
                &za.jurisdiction_id,
                &jurisdiction_ids,
            );
        }

        issues
    }
}
