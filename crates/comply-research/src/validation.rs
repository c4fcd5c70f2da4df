//! # Finding Validation
//!
//! Checks research findings for structural completeness and for references
//! into a loaded framework. Every finding is checked; nothing
//! short-circuits.
//!
//! Errors make the report invalid: missing `controlId`, missing
//! `solutionId`, empty `jurisdictionIds`, a `status` outside the accepted
//! set, or a present `zone` that is not red, yellow or green.
//!
//! Warnings are informational: a solution, control or jurisdiction that the
//! framework does not know yet, and findings without evidence.
//!
//! Validation is a pure function of its inputs.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use comply_core::{ComplianceFramework, ComplianceZone};

use crate::finding::ResearchFinding;

/// Status strings a finding may carry. `unknown` is accepted here even
/// though canonicalization passes it through as an unnamed level.
pub const ACCEPTED_STATUSES: &[&str] = &[
    "compliant",
    "partial",
    "conditional",
    "non-compliant",
    "banned",
    "unknown",
];

/// A single error or warning about one finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Zero-based position of the finding in the input.
    pub index: usize,
    pub field: &'static str,
    /// The offending value; empty when the problem is an absence.
    pub value: String,
    pub message: &'static str,
}

impl ValidationIssue {
    fn new(index: usize, field: &'static str, message: &'static str) -> Self {
        Self {
            index,
            field,
            value: String::new(),
            message,
        }
    }

    fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }
}

/// The outcome of validating a batch of findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationIssue>,
    pub total_checked: usize,
}

impl ValidationReport {
    fn add_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
        self.valid = false;
    }

    fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Warning counts keyed by `"field: message"`, sorted by key.
    pub fn grouped_warnings(&self) -> BTreeMap<String, usize> {
        let mut groups = BTreeMap::new();
        for w in &self.warnings {
            *groups.entry(format!("{}: {}", w.field, w.message)).or_insert(0) += 1;
        }
        groups
    }
}

/// Validate findings against a framework.
pub fn validate(findings: &[ResearchFinding], framework: &ComplianceFramework) -> ValidationReport {
    let solution_ids: HashSet<&str> = framework.solutions.iter().map(|s| s.id.as_str()).collect();
    let requirement_ids: HashSet<&str> =
        framework.requirements.iter().map(|r| r.id.as_str()).collect();
    let jurisdiction_ids: HashSet<&str> =
        framework.jurisdictions.iter().map(|j| j.id.as_str()).collect();

    let mut report = ValidationReport {
        valid: true,
        errors: Vec::new(),
        warnings: Vec::new(),
        total_checked: findings.len(),
    };

    for (i, f) in findings.iter().enumerate() {
        if f.control_id.is_empty() {
            report.add_error(ValidationIssue::new(i, "controlId", "controlId is required"));
        }
        if f.solution_id.is_empty() {
            report.add_error(ValidationIssue::new(i, "solutionId", "solutionId is required"));
        }
        if f.jurisdiction_ids.is_empty() {
            report.add_error(ValidationIssue::new(
                i,
                "jurisdictionIds",
                "at least one jurisdictionId is required",
            ));
        }

        if !f.solution_id.is_empty() && !solution_ids.contains(f.solution_id.as_str()) {
            report.add_warning(
                ValidationIssue::new(
                    i,
                    "solutionId",
                    "solution not found in framework (may need to add it)",
                )
                .with_value(&f.solution_id),
            );
        }
        if !f.control_id.is_empty() && !requirement_ids.contains(f.control_id.as_str()) {
            report.add_warning(
                ValidationIssue::new(
                    i,
                    "controlId",
                    "control not found in requirements (may need to add it)",
                )
                .with_value(&f.control_id),
            );
        }
        for j in &f.jurisdiction_ids {
            if !jurisdiction_ids.contains(j.as_str()) {
                report.add_warning(
                    ValidationIssue::new(i, "jurisdictionIds", "jurisdiction not found in framework")
                        .with_value(j),
                );
            }
        }

        if !ACCEPTED_STATUSES.contains(&f.status.as_str()) {
            report.add_error(
                ValidationIssue::new(i, "status", "invalid status value").with_value(&f.status),
            );
        }
        if let Some(zone) = f.zone_str() {
            if zone.parse::<ComplianceZone>().is_err() {
                report.add_error(
                    ValidationIssue::new(i, "zone", "invalid zone value").with_value(zone),
                );
            }
        }

        if f.evidence.is_empty() {
            report.add_warning(ValidationIssue::new(i, "evidence", "no evidence URLs provided"));
        }
    }

    report
}
