//! # Enforcement Assessments
//!
//! How likely a regulator is to act on a regulation or requirement in a
//! jurisdiction, with the recent actions that inform the estimate.

use serde::{Deserialize, Serialize};

/// Likelihood of enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnforcementLikelihood {
    High,
    Medium,
    Low,
    Uncertain,
}

wire_enum!(EnforcementLikelihood, "enforcement likelihood", {
    High => "high",
    Medium => "medium",
    Low => "low",
    Uncertain => "uncertain",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnforcementAssessment {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub requirement_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub regulation_id: String,
    pub jurisdiction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<EnforcementLikelihood>,
    #[serde(default)]
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_actions: Vec<EnforcementAction>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub regulatory_trends: String,
    #[serde(default)]
    pub assessment_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assessor: String,
}

/// A past enforcement action, e.g. a fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnforcementAction {
    pub date: String,
    /// The entity that was fined or sanctioned.
    pub entity: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub penalty: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_format_matches_as_str() {
        for l in EnforcementLikelihood::ALL {
            let json = serde_json::to_string(l).unwrap();
            assert_eq!(json, format!("\"{}\"", l.as_str()));
        }
    }

    #[test]
    fn assessment_with_actions_parses() {
        let ea: EnforcementAssessment = serde_json::from_str(
            r#"{
                "id": "ENF-FR-1",
                "regulationId": "FR-SECNUMCLOUD",
                "jurisdictionId": "FR",
                "likelihood": "high",
                "rationale": "Active regulator",
                "recentActions": [
                    {"date": "2024-01-10", "entity": "Example SA", "description": "Fine", "penalty": "EUR 1M"}
                ],
                "assessmentDate": "2024-06-01"
            }"#,
        )
        .unwrap();
        assert_eq!(ea.likelihood, Some(EnforcementLikelihood::High));
        assert_eq!(ea.recent_actions[0].penalty, "EUR 1M");
        assert!(ea.requirement_id.is_empty());
    }

    #[test]
    fn likelihood_is_optional() {
        let ea: EnforcementAssessment =
            serde_json::from_str(r#"{"id": "ENF-1", "recentActions": [{"date": "2024-01-10"}]}"#).unwrap();
        assert_eq!(ea.likelihood, None);
        assert!(ea.jurisdiction_id.is_empty());
        assert!(ea.recent_actions[0].entity.is_empty());
    }
}
