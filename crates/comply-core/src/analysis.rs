//! # Compliance Analysis
//!
//! The long-form strategic document that sits beside a framework: why the
//! regulatory landscape looks the way it does, what each market segment
//! needs, which solutions serve it today and later, and what to do about it.
//!
//! Segment and risk vocabularies are shared with the
//! [executive overview](crate::overview).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;
use crate::mapping::ComplianceLevel;
use crate::overview::{EnforcementStatus, RiskLevel, SegmentType};
use crate::zone::ComplianceZone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverType {
    Legislation,
    CourtRuling,
    Policy,
    Geopolitical,
    Standard,
}

wire_enum!(DriverType, "driver type", {
    Legislation => "legislation",
    CourtRuling => "court-ruling",
    Policy => "policy",
    Geopolitical => "geopolitical",
    Standard => "standard",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineEventType {
    Legislation,
    CourtRuling,
    Enforcement,
    Certification,
    Market,
}

wire_enum!(TimelineEventType, "timeline event type", {
    Legislation => "legislation",
    CourtRuling => "court-ruling",
    Enforcement => "enforcement",
    Certification => "certification",
    Market => "market",
});

/// Expected status of a solution that is not yet available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FutureStatus {
    Viable,
    Partial,
    Uncertain,
}

wire_enum!(FutureStatus, "future status", {
    Viable => "viable",
    Partial => "partial",
    Uncertain => "uncertain",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Viability {
    Viable,
    Partial,
    NotViable,
}

wire_enum!(Viability, "viability", {
    Viable => "viable",
    Partial => "partial",
    NotViable => "not-viable",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationPriority {
    Critical,
    High,
    Medium,
    Low,
}

wire_enum!(RecommendationPriority, "recommendation priority", {
    Critical => "critical",
    High => "high",
    Medium => "medium",
    Low => "low",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceAnalysis {
    pub metadata: AnalysisMetadata,
    pub regulatory_context: RegulatoryContext,
    pub market_segments: Vec<SegmentAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_landscape: Option<SolutionLandscape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub glossary: BTreeMap<String, String>,
}

impl ComplianceAnalysis {
    pub fn segment(&self, id: &str) -> Option<&SegmentAnalysis> {
        self.market_segments.iter().find(|s| s.id == id)
    }

    /// Recommendations for one segment, most urgent first. Ties keep
    /// document order; unprioritized ones come last.
    pub fn recommendations_for(&self, segment: &str) -> Vec<&Recommendation> {
        let mut recs: Vec<&Recommendation> = self
            .recommendations
            .iter()
            .filter(|r| r.segment == segment)
            .collect();
        recs.sort_by_key(|r| (r.priority.is_none(), r.priority));
        recs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisMetadata {
    pub title: String,
    pub version: String,
    pub last_updated: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub analyst: String,
    pub scope: AnalysisScope,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisScope {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jurisdictions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regulations: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeframe: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegulatoryContext {
    pub overview: String,
    pub key_drivers: Vec<RegulatoryDriver>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelineEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_landscape: Option<ThreatLandscape>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegulatoryDriver {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DriverType>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jurisdiction: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub impact: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub effective_date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_regulation_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineEvent {
    pub date: String,
    pub event: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub impact: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TimelineEventType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreatLandscape {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extraterritorial_laws: Vec<ExtraterritorialLaw>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_sovereignty_concerns: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub geopolitical_risks: Vec<String>,
}

/// A foreign law that can reach data held in the analyzed jurisdictions,
/// e.g. the US CLOUD Act.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraterritorialLaw {
    pub id: String,
    pub name: String,
    pub jurisdiction: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scope: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_access_powers: String,
    #[serde(rename = "conflictWithEu", skip_serializing_if = "String::is_empty")]
    pub conflict_with_eu: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentAnalysis {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SegmentType>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industries: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jurisdictions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_requirements: Option<SegmentRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_solutions: Option<CurrentSolutions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub future_solutions: Vec<FutureSolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategic_outlook: Option<StrategicOutlook>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_insights: Vec<String>,
}

/// A segment's requirements, bucketed by how essential they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentRequirements {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must_have: Vec<SegmentRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should_have: Vec<SegmentRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nice_to_have: Vec<SegmentRequirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentRequirement {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub control_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regulation_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement_status: Option<EnforcementStatus>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub enforcement_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub why_it_matters: String,
}

/// Solutions available today, bucketed by how well they serve the segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentSolutions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub viable: Vec<SolutionAssessment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partial: Vec<SolutionAssessment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub not_viable: Vec<SolutionAssessment>,
}

impl CurrentSolutions {
    /// The bucket a solution is listed in, if any.
    pub fn viability_of(&self, solution_id: &str) -> Option<Viability> {
        let listed = |bucket: &[SolutionAssessment]| bucket.iter().any(|a| a.solution_id == solution_id);
        if listed(&self.viable) {
            Some(Viability::Viable)
        } else if listed(&self.partial) {
            Some(Viability::Partial)
        } else if listed(&self.not_viable) {
            Some(Viability::NotViable)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionAssessment {
    pub solution_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<ComplianceZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_level: Option<ComplianceLevel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FutureSolution {
    pub solution_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_status: Option<FutureStatus>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub eta: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategicOutlook {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub short_term: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub medium_term: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub long_term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionLandscape {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub overview: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<SolutionCategory>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emerging_trends: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionCategory {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub characteristics: Vec<String>,
    /// Solution ids in this category.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<String>,
    /// Segment type (e.g. "government") to viability.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub segment_viability: BTreeMap<String, Viability>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    pub id: String,
    /// Id of the segment this applies to.
    pub segment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RecommendationPriority>,
    pub recommendation: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rationale: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeframe: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_format_matches_as_str() {
        for v in DriverType::ALL {
            assert_eq!(serde_json::to_string(v).unwrap(), format!("\"{}\"", v.as_str()));
        }
        for v in TimelineEventType::ALL {
            assert_eq!(serde_json::to_string(v).unwrap(), format!("\"{}\"", v.as_str()));
        }
        for v in FutureStatus::ALL {
            assert_eq!(serde_json::to_string(v).unwrap(), format!("\"{}\"", v.as_str()));
        }
        for v in Viability::ALL {
            assert_eq!(serde_json::to_string(v).unwrap(), format!("\"{}\"", v.as_str()));
        }
        for v in RecommendationPriority::ALL {
            assert_eq!(serde_json::to_string(v).unwrap(), format!("\"{}\"", v.as_str()));
        }
    }

    #[test]
    fn segment_analysis_parses() {
        let analysis: ComplianceAnalysis = serde_json::from_str(
            r#"{
                "metadata": {"title": "EU Sovereign Cloud", "version": "2.0", "lastUpdated": "2025-02-01",
                             "scope": {"jurisdictions": ["EU", "FR"], "timeframe": "2025-2027"}},
                "regulatoryContext": {
                    "overview": "Schrems II and NIS2 raise the bar",
                    "keyDrivers": [{"id": "DRV-1", "name": "Schrems II", "type": "court-ruling"}],
                    "threatLandscape": {"extraterritorialLaws": [
                        {"id": "US-CLOUD", "name": "CLOUD Act", "jurisdiction": "US", "conflictWithEu": "GDPR Art. 48"}
                    ]}
                },
                "marketSegments": [{
                    "id": "regulated",
                    "name": "Regulated industries",
                    "type": "regulated",
                    "riskLevel": "high",
                    "complianceRequirements": {"mustHave": [
                        {"id": "SR-1", "name": "EU-only operations", "enforcementStatus": "enforced"}
                    ]},
                    "currentSolutions": {
                        "viable": [{"solutionId": "sovereign-a", "zone": "green", "complianceLevel": "compliant"}],
                        "partial": [{"solutionId": "hyperscaler-b", "zone": "yellow", "gaps": ["US parent"]}]
                    },
                    "futureSolutions": [{"solutionId": "hyperscaler-b-sovereign", "expectedStatus": "viable", "confidence": "medium"}]
                }],
                "solutionLandscape": {"categories": [
                    {"id": "CAT-1", "name": "Sovereign", "segmentViability": {"government": "viable", "commercial": "partial"}}
                ]},
                "recommendations": [
                    {"id": "R-2", "segment": "regulated", "recommendation": "Track SecNumCloud", "priority": "medium"},
                    {"id": "R-1", "segment": "regulated", "recommendation": "Exit US-parented providers", "priority": "critical"},
                    {"id": "R-3", "segment": "government", "recommendation": "Certify"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(analysis.metadata.scope.jurisdictions, vec!["EU", "FR"]);
        assert_eq!(
            analysis.regulatory_context.key_drivers[0].kind,
            Some(DriverType::CourtRuling)
        );
        let threats = analysis.regulatory_context.threat_landscape.as_ref().unwrap();
        assert_eq!(threats.extraterritorial_laws[0].conflict_with_eu, "GDPR Art. 48");

        let seg = analysis.segment("regulated").unwrap();
        assert_eq!(seg.kind, Some(SegmentType::Regulated));
        let current = seg.current_solutions.as_ref().unwrap();
        assert_eq!(current.viability_of("sovereign-a"), Some(Viability::Viable));
        assert_eq!(current.viability_of("hyperscaler-b"), Some(Viability::Partial));
        assert_eq!(current.viability_of("unknown"), None);
        assert_eq!(current.viable[0].compliance_level, Some(ComplianceLevel::Compliant));
        assert_eq!(seg.future_solutions[0].confidence, Some(Confidence::Medium));

        let landscape = analysis.solution_landscape.as_ref().unwrap();
        assert_eq!(
            landscape.categories[0].segment_viability["government"],
            Viability::Viable
        );

        let ids: Vec<_> = analysis
            .recommendations_for("regulated")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["R-1", "R-2"]);
    }

    #[test]
    fn empty_document_keeps_required_sections_on_output() {
        let analysis: ComplianceAnalysis = serde_json::from_str("{}").unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["marketSegments"].as_array().unwrap().is_empty());
        assert_eq!(json["regulatoryContext"]["overview"], "");
        assert!(json["regulatoryContext"]["keyDrivers"].as_array().unwrap().is_empty());
        assert!(json.get("solutionLandscape").is_none());
        assert!(json.get("recommendations").is_none());
    }
}
