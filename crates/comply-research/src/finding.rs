//! # Research Findings
//!
//! The loosely-validated input shape submitted by researchers, and its
//! canonicalization into [`RequirementMapping`] records.
//!
//! A finding is deliberately permissive on load: identifiers default to
//! empty, `status` is a free-form string and `zone` is kept raw. Problems
//! with those values are reported by the validator, not by the parser, so a
//! half-finished research file can still be analyzed.

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use comply_core::Confidence;
use comply_core::{ComplianceLevel, ComplianceZone, RequirementMapping};

/// A research submission: metadata plus findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchInput {
    #[serde(default)]
    pub metadata: ResearchMetadata,
    #[serde(default)]
    pub findings: Vec<ResearchFinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchMetadata {
    /// Stamped as the assessment date of every converted or merged mapping.
    #[serde(default)]
    pub research_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub researcher: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// A single researcher-submitted compliance finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchFinding {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub regulation_id: String,
    /// The requirement this finding assesses.
    #[serde(default)]
    pub control_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub control_name: String,
    #[serde(default)]
    pub solution_id: String,
    #[serde(default)]
    pub jurisdiction_ids: Vec<String>,
    /// Free-form; canonicalized through [`ComplianceLevel::from_status`].
    #[serde(default)]
    pub status: String,
    /// Raw zone string, checked by the validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub eta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl ResearchFinding {
    /// The raw zone, treating an empty string as absent.
    pub fn zone_str(&self) -> Option<&str> {
        self.zone.as_deref().filter(|z| !z.is_empty())
    }

    /// The parsed zone. An unrecognized value is logged and dropped.
    pub fn parsed_zone(&self) -> Option<ComplianceZone> {
        let raw = self.zone_str()?;
        match raw.parse::<ComplianceZone>() {
            Ok(zone) => Some(zone),
            Err(err) => {
                warn!(control = %self.control_id, solution = %self.solution_id, "{err}; zone left empty");
                None
            }
        }
    }

    pub fn compliance_level(&self) -> ComplianceLevel {
        ComplianceLevel::from_status(&self.status)
    }

    /// Convert to a mapping with id `MAP-RESEARCH-NNNN`, where `sequence` is
    /// the 1-based position in the batch.
    ///
    /// Mapping zones are typed, so a zone outside red/yellow/green is not
    /// copied through: the mapping gets no zone and a warning is logged.
    /// [`validate`](crate::validate) reports such zones
    /// before an import gets this far.
    pub fn to_mapping(&self, sequence: usize, assessment_date: &str) -> RequirementMapping {
        self.to_mapping_with_id(format!("MAP-RESEARCH-{sequence:04}"), assessment_date)
    }

    pub(crate) fn to_mapping_with_id(&self, id: String, assessment_date: &str) -> RequirementMapping {
        RequirementMapping {
            id,
            requirement_id: self.control_id.clone(),
            solution_id: self.solution_id.clone(),
            jurisdiction_ids: self.jurisdiction_ids.clone(),
            compliance_level: self.compliance_level(),
            zone: self.parsed_zone(),
            notes: self.notes.clone(),
            evidence: self.evidence.clone(),
            conditions: String::new(),
            eta: self.eta.clone(),
            assessment_date: assessment_date.to_string(),
        }
    }
}

impl ResearchInput {
    /// Convert every finding to a mapping, numbering from 1 in list order.
    ///
    /// Identifiers are reproducible for a fixed finding list but shift when
    /// findings are inserted or removed.
    pub fn to_mappings(&self) -> Vec<RequirementMapping> {
        self.findings
            .iter()
            .enumerate()
            .map(|(i, f)| f.to_mapping(i + 1, &self.metadata.research_date))
            .collect()
    }
}
