//! # Reconciliation
//!
//! Matches research findings against an existing mapping set and splits the
//! result into new, updated and unchanged records.
//!
//! ## Matching
//!
//! Every existing mapping is indexed under one key per jurisdiction it lists,
//! `(requirement, solution, jurisdiction)`. A mapping with no jurisdictions
//! applies everywhere and is indexed under the wildcard key
//! `(requirement, solution, *)`. When two existing mappings produce the same
//! key, the later one in load order owns it.
//!
//! A finding tries its jurisdictions in the order it lists them and takes
//! the first hit. Only when none hits does it fall back to the wildcard key.
//! A finding scoped to `["DE", "FR"]` therefore matches a DE-scoped mapping
//! before an applies-everywhere mapping for the same pair.
//!
//! ## Partition
//!
//! - A matched existing mapping is emitted once in `updated`: a copy with the
//!   compliance level, zone, notes, evidence, ETA and assessment date taken
//!   from the finding. A zone the finding spells in a way
//!   [`ComplianceZone`](comply_core::ComplianceZone) does not know clears the
//!   zone. The id, jurisdictions and conditions are kept. When
//!   several findings match the same mapping, the last one wins and the
//!   record stays at the position of the first match.
//! - An unmatched finding becomes a `new` mapping with id
//!   `MAP-NEW-<control>-<solution>`. Two unmatched findings for the same
//!   pair produce the same id; this is accepted so repeated imports converge.
//! - Existing mappings never matched are emitted unchanged, in load order.
//!
//! So `updated.len() + unchanged.len() == existing.len()`, the inputs are
//! never mutated, and equal inputs give equal outcomes.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use comply_core::RequirementMapping;

use crate::finding::ResearchFinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Scope<'a> {
    Jurisdiction(&'a str),
    Wildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MatchKey<'a> {
    requirement: &'a str,
    solution: &'a str,
    scope: Scope<'a>,
}

impl<'a> MatchKey<'a> {
    fn new(requirement: &'a str, solution: &'a str, scope: Scope<'a>) -> Self {
        Self {
            requirement,
            solution,
            scope,
        }
    }
}

/// Index existing mappings by match key. Values are positions in `existing`.
fn build_index(existing: &[RequirementMapping]) -> HashMap<MatchKey<'_>, usize> {
    let mut index = HashMap::new();
    for (pos, m) in existing.iter().enumerate() {
        if m.jurisdiction_ids.is_empty() {
            index.insert(
                MatchKey::new(&m.requirement_id, &m.solution_id, Scope::Wildcard),
                pos,
            );
        }
        for j in &m.jurisdiction_ids {
            index.insert(
                MatchKey::new(&m.requirement_id, &m.solution_id, Scope::Jurisdiction(j)),
                pos,
            );
        }
    }
    index
}

fn find_match(index: &HashMap<MatchKey<'_>, usize>, finding: &ResearchFinding) -> Option<usize> {
    let requirement = finding.control_id.as_str();
    let solution = finding.solution_id.as_str();
    finding
        .jurisdiction_ids
        .iter()
        .find_map(|j| {
            index
                .get(&MatchKey::new(requirement, solution, Scope::Jurisdiction(j)))
                .copied()
        })
        .or_else(|| {
            index
                .get(&MatchKey::new(requirement, solution, Scope::Wildcard))
                .copied()
        })
}

/// Overlay a finding onto a copy of an existing mapping.
fn apply_finding(
    existing: &RequirementMapping,
    finding: &ResearchFinding,
    research_date: &str,
) -> RequirementMapping {
    RequirementMapping {
        compliance_level: finding.compliance_level(),
        zone: finding.parsed_zone(),
        notes: finding.notes.clone(),
        evidence: finding.evidence.clone(),
        eta: finding.eta.clone(),
        assessment_date: research_date.to_string(),
        ..existing.clone()
    }
}

/// The three-way partition produced by [`merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub new: Vec<RequirementMapping>,
    pub updated: Vec<RequirementMapping>,
    pub unchanged: Vec<RequirementMapping>,
}

impl MergeOutcome {
    pub fn total(&self) -> usize {
        self.new.len() + self.updated.len() + self.unchanged.len()
    }

    /// The merged mapping set: unchanged, then updated, then new.
    pub fn into_combined(self) -> Vec<RequirementMapping> {
        let mut all = Vec::with_capacity(self.total());
        all.extend(self.unchanged);
        all.extend(self.updated);
        all.extend(self.new);
        all
    }
}

/// Reconcile findings against existing mappings.
pub fn merge(
    findings: &[ResearchFinding],
    research_date: &str,
    existing: &[RequirementMapping],
) -> MergeOutcome {
    let index = build_index(existing);
    // For each existing position, where its record sits in `updated`.
    let mut updated_slot: Vec<Option<usize>> = vec![None; existing.len()];
    let mut outcome = MergeOutcome::default();

    for finding in findings {
        match find_match(&index, finding) {
            Some(pos) => {
                let record = apply_finding(&existing[pos], finding, research_date);
                match updated_slot[pos] {
                    Some(slot) => {
                        debug!(id = %record.id, "mapping matched again, keeping latest finding");
                        outcome.updated[slot] = record;
                    }
                    None => {
                        updated_slot[pos] = Some(outcome.updated.len());
                        outcome.updated.push(record);
                    }
                }
            }
            None => {
                let id = format!("MAP-NEW-{}-{}", finding.control_id, finding.solution_id);
                outcome
                    .new
                    .push(finding.to_mapping_with_id(id, research_date));
            }
        }
    }

    outcome.unchanged = existing
        .iter()
        .zip(&updated_slot)
        .filter(|(_, slot)| slot.is_none())
        .map(|(m, _)| m.clone())
        .collect();

    info!(
        new = outcome.new.len(),
        updated = outcome.updated.len(),
        unchanged = outcome.unchanged.len(),
        "merged research findings"
    );
    outcome
}


#[cfg(test)]
mod proptests {
    use super::*;
    use comply_core::ComplianceLevel;
    use proptest::prelude::*;

    // Small identifier alphabets so findings and mappings collide often.
    fn req_id() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["REQ-1", "REQ-2", "REQ-3"]).prop_map(String::from)
    }

    fn sol_id() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["sol-a", "sol-b"]).prop_map(String::from)
    }

    fn jurisdictions() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::sample::select(vec!["EU", "FR", "DE", "UK"]).prop_map(String::from),
            0..3,
        )
    }

    fn existing_mappings() -> impl Strategy<Value = Vec<RequirementMapping>> {
        prop::collection::vec((req_id(), sol_id(), jurisdictions()), 0..8).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (req, sol, jids))| {
                    RequirementMapping::new(format!("M-{i}"), req, sol, ComplianceLevel::Partial)
                        .scoped_to(jids)
                })
                .collect()
        })
    }

    fn findings() -> impl Strategy<Value = Vec<ResearchFinding>> {
        let status = prop::sample::select(vec!["compliant", "banned", "unknown", "partial"]);
        prop::collection::vec((req_id(), sol_id(), jurisdictions(), status), 0..8).prop_map(
            |rows| {
                rows.into_iter()
                    .map(|(control_id, solution_id, jurisdiction_ids, status)| ResearchFinding {
                        control_id,
                        solution_id,
                        jurisdiction_ids,
                        status: status.to_string(),
                        ..ResearchFinding::default()
                    })
                    .collect()
            },
        )
    }

    proptest! {
        /// Every existing mapping lands in exactly one of updated or unchanged.
        #[test]
        fn partitions_existing(existing in existing_mappings(), findings in findings()) {
            let out = merge(&findings, "2025-01-01", &existing);
            prop_assert_eq!(out.updated.len() + out.unchanged.len(), existing.len());

            let mut ids: Vec<String> = out
                .updated
                .iter()
                .chain(&out.unchanged)
                .map(|m| m.id.clone())
                .collect();
            ids.sort();
            let mut expected: Vec<String> = existing.iter().map(|m| m.id.clone()).collect();
            expected.sort();
            prop_assert_eq!(ids, expected);
        }

        /// Each finding either updates an existing mapping or becomes new.
        #[test]
        fn new_records_bounded_by_findings(existing in existing_mappings(), findings in findings()) {
            let out = merge(&findings, "", &existing);
            prop_assert!(out.new.len() <= findings.len());
            prop_assert!(out.updated.len() + out.new.len() <= findings.len());
        }

        /// Unchanged records are byte-for-byte copies of the input.
        #[test]
        fn unchanged_records_are_untouched(existing in existing_mappings(), findings in findings()) {
            let out = merge(&findings, "2025-01-01", &existing);
            for m in &out.unchanged {
                prop_assert!(existing.contains(m));
            }
        }

        /// Equal inputs give equal outcomes, and the inputs are left intact.
        #[test]
        fn idempotent_and_pure(existing in existing_mappings(), findings in findings()) {
            let existing_before = existing.clone();
            let findings_before = findings.clone();
            let a = merge(&findings, "2025-01-01", &existing);
            let b = merge(&findings, "2025-01-01", &existing);
            prop_assert_eq!(a, b);
            prop_assert_eq!(existing, existing_before);
            prop_assert_eq!(findings, findings_before);
        }
    }
}
