//! # Solutions
//!
//! A solution is a cloud offering assessed against requirements: a
//! hyperscaler region, a government cloud, a sovereign partner offering.
//! `jurisdiction_ids` lists where the offering is available; the coverage
//! analyzer uses it to build each jurisdiction's solution set.

use serde::{Deserialize, Serialize};

use crate::external_ref::ExternalRef;

/// The kind of cloud solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolutionType {
    Commercial,
    #[serde(rename = "govcloud")]
    GovCloud,
    Sovereign,
    NationalPartner,
    Private,
}

wire_enum!(SolutionType, "solution type", {
    Commercial => "commercial",
    GovCloud => "govcloud",
    Sovereign => "sovereign",
    NationalPartner => "national-partner",
    Private => "private",
});

/// A cloud solution or service offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Identifier, e.g. "aws-commercial".
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub provider: String,
    /// Absent in minimal documents.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SolutionType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_regions: Vec<String>,
    /// e.g. "SecNumCloud", "C5", "ISO27001".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_structure: Option<OwnershipStructure>,
    /// Jurisdictions where the solution is available.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jurisdiction_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
}

impl Solution {
    /// Create a solution with only the required fields populated.
    pub fn new(id: impl Into<String>, provider: impl Into<String>, kind: SolutionType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            provider: provider.into(),
            kind: Some(kind),
            description: String::new(),
            available_regions: Vec::new(),
            certifications: Vec::new(),
            ownership_structure: None,
            jurisdiction_ids: Vec::new(),
            external_refs: Vec::new(),
        }
    }

    /// Set the jurisdictions the solution is available in.
    pub fn available_in<I, S>(mut self, jurisdiction_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jurisdiction_ids = jurisdiction_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the solution is offered in the given jurisdiction.
    pub fn is_available_in(&self, jurisdiction_id: &str) -> bool {
        self.jurisdiction_ids.iter().any(|j| j == jurisdiction_id)
    }
}

/// Ownership details relevant to sovereignty rules such as the SecNumCloud
/// limits on non-EU shareholding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnershipStructure {
    pub eu_ownership_percent: f64,
    pub largest_non_eu_percent: f64,
    /// CLOUD Act and similar.
    pub subject_to_extra_territorial_law: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub controlling_entity: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_format_matches_as_str() {
        for kind in SolutionType::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn govcloud_and_national_partner_wire_names() {
        assert_eq!(SolutionType::GovCloud.as_str(), "govcloud");
        assert_eq!(
            "national-partner".parse::<SolutionType>().unwrap(),
            SolutionType::NationalPartner
        );
    }

    #[test]
    fn availability_check() {
        let s = Solution::new("cloud-provider-a", "Provider A", SolutionType::Commercial)
            .available_in(["EU", "UK"]);
        assert!(s.is_available_in("EU"));
        assert!(!s.is_available_in("KSA"));
    }

    #[test]
    fn ownership_structure_parses() {
        let s: Solution = serde_json::from_str(
            r#"{
                "id": "sov-a", "name": "Sovereign A", "provider": "A", "type": "sovereign",
                "ownershipStructure": {
                    "euOwnershipPercent": 100,
                    "largestNonEuPercent": 0,
                    "subjectToExtraTerritorialLaw": false
                }
            }"#,
        )
        .unwrap();
        let own = s.ownership_structure.unwrap();
        assert_eq!(own.eu_ownership_percent, 100.0);
        assert!(!own.subject_to_extra_territorial_law);
    }

    #[test]
    fn minimal_solution_parses_without_type() {
        let s: Solution =
            serde_json::from_str(r#"{"id": "cloud-provider-a", "jurisdictionIds": ["EU"]}"#).unwrap();
        assert_eq!(s.kind, None);
        assert!(s.is_available_in("EU"));
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("type").is_none());
    }
}
