//! # Requirement Mappings
//!
//! The central fact table of the catalog: the compliance status of one
//! (requirement, solution) pair, optionally scoped to a list of
//! jurisdictions. An empty jurisdiction list means the mapping applies
//! everywhere.
//!
//! [`ComplianceLevel`] is deliberately open. Research findings carry a
//! free-form status string; the five known values map to named variants and
//! anything else is carried through verbatim in [`ComplianceLevel::Other`],
//! so an unfamiliar status written by a newer tool is neither rejected nor
//! lost on save.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::zone::ComplianceZone;

/// Compliance level of a requirement-solution mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplianceLevel {
    Compliant,
    Partial,
    NonCompliant,
    Conditional,
    /// Explicitly prohibited.
    Banned,
    /// A status outside the known set, preserved as written.
    Other(String),
}

impl ComplianceLevel {
    /// The named levels, in declaration order.
    pub const KNOWN: &'static [ComplianceLevel] = &[
        ComplianceLevel::Compliant,
        ComplianceLevel::Partial,
        ComplianceLevel::NonCompliant,
        ComplianceLevel::Conditional,
        ComplianceLevel::Banned,
    ];

    /// Canonicalize a free-form status string.
    ///
    /// Matching is exact: `"Compliant"` is not `"compliant"` and ends up in
    /// [`ComplianceLevel::Other`].
    pub fn from_status(status: &str) -> Self {
        match status {
            "compliant" => ComplianceLevel::Compliant,
            "partial" => ComplianceLevel::Partial,
            "non-compliant" => ComplianceLevel::NonCompliant,
            "conditional" => ComplianceLevel::Conditional,
            "banned" => ComplianceLevel::Banned,
            other => ComplianceLevel::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ComplianceLevel::Compliant => "compliant",
            ComplianceLevel::Partial => "partial",
            ComplianceLevel::NonCompliant => "non-compliant",
            ComplianceLevel::Conditional => "conditional",
            ComplianceLevel::Banned => "banned",
            ComplianceLevel::Other(s) => s,
        }
    }

    /// Whether this is one of the named levels.
    pub fn is_known(&self) -> bool {
        !matches!(self, ComplianceLevel::Other(_))
    }
}

/// An absent status reads as the empty string.
impl Default for ComplianceLevel {
    fn default() -> Self {
        ComplianceLevel::Other(String::new())
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<String> for ComplianceLevel {
    fn from(s: String) -> Self {
        match ComplianceLevel::from_status(&s) {
            ComplianceLevel::Other(_) => ComplianceLevel::Other(s),
            known => known,
        }
    }
}

impl From<&str> for ComplianceLevel {
    fn from(s: &str) -> Self {
        ComplianceLevel::from_status(s)
    }
}

impl From<ComplianceLevel> for String {
    fn from(level: ComplianceLevel) -> Self {
        match level {
            ComplianceLevel::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Compliance status of a (requirement, solution) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequirementMapping {
    pub id: String,
    pub requirement_id: String,
    pub solution_id: String,
    /// Jurisdictions this mapping is scoped to. Empty means everywhere.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jurisdiction_ids: Vec<String>,
    pub compliance_level: ComplianceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ComplianceZone>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
    /// What is needed to reach compliance.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub conditions: String,
    /// Expected availability, e.g. "2026" or "Q4 2026".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub eta: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assessment_date: String,
}

impl RequirementMapping {
    /// Create an unscoped mapping with only the required fields populated.
    pub fn new(
        id: impl Into<String>,
        requirement_id: impl Into<String>,
        solution_id: impl Into<String>,
        compliance_level: ComplianceLevel,
    ) -> Self {
        Self {
            id: id.into(),
            requirement_id: requirement_id.into(),
            solution_id: solution_id.into(),
            jurisdiction_ids: Vec::new(),
            compliance_level,
            zone: None,
            notes: String::new(),
            evidence: Vec::new(),
            conditions: String::new(),
            eta: String::new(),
            assessment_date: String::new(),
        }
    }

    /// Scope the mapping to the given jurisdictions.
    pub fn scoped_to<I, S>(mut self, jurisdiction_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jurisdiction_ids = jurisdiction_ids.into_iter().map(Into::into).collect();
        self
    }

    /// True when the mapping applies everywhere or lists `jurisdiction_id`.
    pub fn applies_to(&self, jurisdiction_id: &str) -> bool {
        self.jurisdiction_ids.is_empty() || self.jurisdiction_ids.iter().any(|j| j == jurisdiction_id)
    }

    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_known_values() {
        assert_eq!(ComplianceLevel::from_status("compliant"), ComplianceLevel::Compliant);
        assert_eq!(ComplianceLevel::from_status("partial"), ComplianceLevel::Partial);
        assert_eq!(
            ComplianceLevel::from_status("non-compliant"),
            ComplianceLevel::NonCompliant
        );
        assert_eq!(ComplianceLevel::from_status("conditional"), ComplianceLevel::Conditional);
        assert_eq!(ComplianceLevel::from_status("banned"), ComplianceLevel::Banned);
    }

    #[test]
    fn from_status_passes_unknown_through() {
        let level = ComplianceLevel::from_status("unknown");
        assert_eq!(level, ComplianceLevel::Other("unknown".into()));
        assert_eq!(level.as_str(), "unknown");
        assert!(!level.is_known());

        let level = ComplianceLevel::from_status("Compliant");
        assert_eq!(level.as_str(), "Compliant");
    }

    #[test]
    fn serde_format_matches_as_str() {
        for level in ComplianceLevel::KNOWN {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
        let other = ComplianceLevel::Other("pending-review".into());
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"pending-review\"");
    }

    #[test]
    fn unknown_level_survives_json_round_trip() {
        let json = r#"{"id":"M-1","requirementId":"R-1","solutionId":"S-1","complianceLevel":"under-review"}"#;
        let m: RequirementMapping = serde_json::from_str(json).unwrap();
        assert_eq!(m.compliance_level, ComplianceLevel::Other("under-review".into()));
        assert_eq!(serde_json::to_string(&m).unwrap(), json);
    }

    #[test]
    fn applies_to_empty_scope_everywhere() {
        let m = RequirementMapping::new("M-1", "R-1", "S-1", ComplianceLevel::Compliant);
        assert!(m.applies_to("EU"));
        assert!(m.applies_to("KSA"));

        let scoped = m.scoped_to(["DE", "FR"]);
        assert!(scoped.applies_to("DE"));
        assert!(!scoped.applies_to("EU"));
    }

    #[test]
    fn optional_fields_omitted_and_zone_parsed() {
        let m: RequirementMapping = serde_json::from_str(
            r#"{"id":"M-2","requirementId":"R-1","solutionId":"S-1","complianceLevel":"partial","zone":"red","conditions":"needs trustee"}"#,
        )
        .unwrap();
        assert_eq!(m.zone, Some(ComplianceZone::Red));
        let out = serde_json::to_value(&m).unwrap();
        assert!(out.get("evidence").is_none());
        assert!(out.get("jurisdictionIds").is_none());
        assert_eq!(out["conditions"], "needs trustee");
    }

    #[test]
    fn missing_level_reads_as_empty_status() {
        let m: RequirementMapping =
            serde_json::from_str(r#"{"requirementId":"R-1","solutionId":"S-1"}"#).unwrap();
        assert!(m.id.is_empty());
        assert_eq!(m.compliance_level.as_str(), "");
        assert!(!m.compliance_level.is_known());
    }
}
