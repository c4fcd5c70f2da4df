//! # comply-coverage — Coverage Matrix Analysis
//!
//! Cross-tabulates mappings against the requirement × solution matrix of
//! each jurisdiction of interest.
//!
//! ## Model
//!
//! For a jurisdiction J, the solutions available in J are those listing J in
//! their `jurisdictionIds`. The matrix of J has one cell per
//! (requirement, available solution) pair:
//!
//! ```text
//! max_cells(J) = |requirements| × |solutions available in J|
//! ```
//!
//! A mapping covers cell (r, s) in J when it applies to J (no jurisdictions,
//! or J listed) and its requirement and solution are r and s. A cell counts
//! once however many mappings cover it, and counts as evidenced when any
//! covering mapping carries evidence. Mappings outside the matrix (unknown
//! requirement, or a solution not offered in J) cover nothing, so
//! `missing_cells` is never negative.
//!
//! The summary sums cell counts across jurisdictions and recomputes the
//! percentages from those sums rather than averaging per-jurisdiction
//! percentages.
//!
//! The jurisdiction list is curated by the caller; loaded jurisdictions not
//! on it are not analyzed.
//!
//! In JSON, `byJurisdiction` is an object keyed by jurisdiction id, with keys
//! written in the order the jurisdictions were requested.

use std::collections::HashSet;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::debug;

use comply_core::{Requirement, RequirementMapping, Solution};

/// Jurisdictions analyzed when the caller does not configure a list.
pub const DEFAULT_JURISDICTIONS: &[&str] = &["EU", "FR", "DE", "UK", "KSA"];

/// Coverage of one jurisdiction's matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionCoverage {
    pub jurisdiction_id: String,
    pub solution_count: usize,
    pub max_cells: usize,
    pub covered_cells: usize,
    pub coverage_percent: f64,
    pub with_evidence: usize,
    pub evidence_percent: f64,
    pub missing_cells: usize,
}

impl JurisdictionCoverage {
    /// Share of the matrix not covered. Zero for an empty matrix.
    pub fn gap_percent(&self) -> f64 {
        if self.max_cells == 0 {
            0.0
        } else {
            100.0 - self.coverage_percent
        }
    }
}

/// Aggregate over all analyzed jurisdictions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub total_max: usize,
    pub total_covered: usize,
    pub total_evidence: usize,
    pub coverage_percent: f64,
    pub evidence_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageStats {
    pub total_requirements: usize,
    pub total_solutions: usize,
    pub total_mappings: usize,
    pub mappings_with_evidence: usize,
    /// Share of all mappings that carry evidence.
    pub evidence_percent: f64,
    /// In the order the jurisdictions were requested.
    #[serde(serialize_with = "keyed_by_jurisdiction")]
    pub by_jurisdiction: Vec<JurisdictionCoverage>,
    pub summary: CoverageSummary,
}

impl CoverageStats {
    pub fn jurisdiction(&self, id: &str) -> Option<&JurisdictionCoverage> {
        self.by_jurisdiction.iter().find(|jc| jc.jurisdiction_id == id)
    }
}

fn keyed_by_jurisdiction<S: Serializer>(
    entries: &[JurisdictionCoverage],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for jc in entries {
        map.serialize_entry(&jc.jurisdiction_id, jc)?;
    }
    map.end()
}

/// `part / whole × 100`, or 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn jurisdiction_coverage(
    jurisdiction_id: &str,
    mappings: &[RequirementMapping],
    solutions: &[Solution],
    requirements: &[Requirement],
) -> JurisdictionCoverage {
    let available: HashSet<&str> = solutions
        .iter()
        .filter(|s| s.is_available_in(jurisdiction_id))
        .map(|s| s.id.as_str())
        .collect();
    let requirement_ids: HashSet<&str> = requirements.iter().map(|r| r.id.as_str()).collect();

    let solution_count = solutions
        .iter()
        .filter(|s| s.is_available_in(jurisdiction_id))
        .count();
    let max_cells = requirements.len() * solution_count;

    let mut covered = HashSet::new();
    let mut evidenced = HashSet::new();
    for m in mappings {
        if !m.applies_to(jurisdiction_id)
            || !requirement_ids.contains(m.requirement_id.as_str())
            || !available.contains(m.solution_id.as_str())
        {
            continue;
        }
        let cell = (m.requirement_id.as_str(), m.solution_id.as_str());
        covered.insert(cell);
        if m.has_evidence() {
            evidenced.insert(cell);
        }
    }

    let covered_cells = covered.len();
    let with_evidence = evidenced.len();
    debug!(
        jurisdiction = jurisdiction_id,
        max_cells, covered_cells, with_evidence, "jurisdiction coverage"
    );

    JurisdictionCoverage {
        jurisdiction_id: jurisdiction_id.to_string(),
        solution_count,
        max_cells,
        covered_cells,
        coverage_percent: percent(covered_cells, max_cells),
        with_evidence,
        evidence_percent: percent(with_evidence, covered_cells),
        missing_cells: max_cells - covered_cells,
    }
}

/// Compute coverage for the given jurisdictions of interest.
pub fn analyze_coverage<S: AsRef<str>>(
    mappings: &[RequirementMapping],
    solutions: &[Solution],
    requirements: &[Requirement],
    jurisdictions: &[S],
) -> CoverageStats {
    let mappings_with_evidence = mappings.iter().filter(|m| m.has_evidence()).count();

    let by_jurisdiction: Vec<JurisdictionCoverage> = jurisdictions
        .iter()
        .map(|j| jurisdiction_coverage(j.as_ref(), mappings, solutions, requirements))
        .collect();

    let total_max = by_jurisdiction.iter().map(|jc| jc.max_cells).sum();
    let total_covered = by_jurisdiction.iter().map(|jc| jc.covered_cells).sum();
    let total_evidence = by_jurisdiction.iter().map(|jc| jc.with_evidence).sum();
    let summary = CoverageSummary {
        total_max,
        total_covered,
        total_evidence,
        coverage_percent: percent(total_covered, total_max),
        evidence_percent: percent(total_evidence, total_covered),
    };

    CoverageStats {
        total_requirements: requirements.len(),
        total_solutions: solutions.len(),
        total_mappings: mappings.len(),
        mappings_with_evidence,
        evidence_percent: percent(mappings_with_evidence, mappings.len()),
        by_jurisdiction,
        summary,
    }
}
