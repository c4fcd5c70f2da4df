//! # Executive Overview
//!
//! The summary document a dashboard renders on its landing page: market
//! segments with their key requirements, per-provider readiness across
//! segment types, regulatory background and a dated outlook.
//!
//! Every field defaults when absent. Lists and nested sections that the
//! document omits stay omitted on output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::zone::ComplianceZone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentType {
    Commercial,
    Regulated,
    Government,
}

wire_enum!(SegmentType, "segment type", {
    Commercial => "commercial",
    Regulated => "regulated",
    Government => "government",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

wire_enum!(RiskLevel, "risk level", {
    Critical => "critical",
    High => "high",
    Medium => "medium",
    Low => "low",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementPriority {
    MustHave,
    ShouldHave,
    NiceToHave,
}

wire_enum!(RequirementPriority, "requirement priority", {
    MustHave => "must-have",
    ShouldHave => "should-have",
    NiceToHave => "nice-to-have",
});

/// Where a requirement stands in its regulation's rollout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnforcementStatus {
    Enforced,
    Upcoming,
    Proposed,
    Guidance,
}

wire_enum!(EnforcementStatus, "enforcement status", {
    Enforced => "enforced",
    Upcoming => "upcoming",
    Proposed => "proposed",
    Guidance => "guidance",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderStatus {
    Ready,
    Partial,
    Planned,
    NotViable,
}

wire_enum!(ProviderStatus, "provider status", {
    Ready => "ready",
    Partial => "partial",
    Planned => "planned",
    NotViable => "not-viable",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutiveOverview {
    pub metadata: OverviewMetadata,
    pub segments: Vec<MarketSegment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provider_readiness: Vec<ProviderReadiness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory_context: Option<OverviewRegulatoryContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlook: Option<Outlook>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_takeaways: Vec<String>,
    /// Term to definition.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub glossary: BTreeMap<String, String>,
}

impl ExecutiveOverview {
    pub fn segment(&self, id: &str) -> Option<&MarketSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn provider(&self, solution_id: &str) -> Option<&ProviderReadiness> {
        self.provider_readiness
            .iter()
            .find(|p| p.solution_id == solution_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewMetadata {
    pub title: String,
    pub version: String,
    pub last_updated: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub analyst: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scope: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketSegment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SegmentType>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industries: Vec<String>,
    pub jurisdictions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applicable_regulations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    pub key_requirements: Vec<KeyRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provider_assessments: Vec<SegmentProviderAssessment>,
}

impl MarketSegment {
    /// Key requirements of the given priority, in document order.
    pub fn requirements_with_priority(&self, priority: RequirementPriority) -> Vec<&KeyRequirement> {
        self.key_requirements
            .iter()
            .filter(|r| r.priority == Some(priority))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyRequirement {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequirementPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnforcementStatus>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub effective_date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_regulations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub control_ids: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentProviderAssessment {
    pub solution_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_status: Option<ProviderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<ComplianceZone>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub eta: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// One provider's readiness across segment types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderReadiness {
    pub solution_id: String,
    pub provider: String,
    /// Free-form label, e.g. "hyperscaler" or "sovereign".
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_readiness: Option<SegmentReadiness>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sovereignty_status: Option<SovereigntyStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_strengths: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_limitations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentReadiness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial: Option<ProviderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulated: Option<ProviderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub government: Option<ProviderStatus>,
}

impl SegmentReadiness {
    pub fn for_segment(&self, segment: SegmentType) -> Option<ProviderStatus> {
        match segment {
            SegmentType::Commercial => self.commercial,
            SegmentType::Regulated => self.regulated,
            SegmentType::Government => self.government,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SovereigntyStatus {
    #[serde(skip_serializing_if = "is_false")]
    pub eu_owned: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub cloud_act_immune: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub sec_num_cloud_certified: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub sec_num_cloud_planned: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sec_num_cloud_eta: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewRegulatoryContext {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub overview: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_drivers: Vec<OverviewDriver>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewDriver {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub impact: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub effective_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Outlook {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_term: Option<OutlookPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_term: Option<OutlookPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term: Option<OutlookPeriod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutlookPeriod {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeframe: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub developments: Vec<String>,
}
