//! # Regulations
//!
//! Regulations and directives, their sections, and the categories of
//! organization they regulate.

use serde::{Deserialize, Serialize};

use crate::external_ref::ExternalRef;

/// Lifecycle status of a regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegulationStatus {
    Draft,
    Adopted,
    Enforceable,
    Superseded,
}

wire_enum!(RegulationStatus, "regulation status", {
    Draft => "draft",
    Adopted => "adopted",
    Enforceable => "enforceable",
    Superseded => "superseded",
});

/// A compliance regulation or directive, e.g. NIS2 or GDPR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Regulation {
    /// Identifier, e.g. "EU-NIS2".
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Short label, e.g. "NIS2", "GDPR", "DORA".
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub description: String,
    pub jurisdiction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RegulationStatus>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub adopted_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effective_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub enforcement_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub official_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regulated_entities: Vec<RegulatedEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
    /// Free-form tags, e.g. "data-sovereignty".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Regulation {
    /// Create a regulation with only the required fields populated.
    pub fn new(
        id: impl Into<String>,
        jurisdiction_id: impl Into<String>,
        status: RegulationStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            short_name: String::new(),
            description: String::new(),
            jurisdiction_id: jurisdiction_id.into(),
            status: Some(status),
            adopted_date: String::new(),
            effective_date: String::new(),
            enforcement_date: String::new(),
            official_url: String::new(),
            sections: Vec::new(),
            regulated_entities: Vec::new(),
            external_refs: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// A section or article within a regulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    /// Identifier, e.g. "NIS2-ART21".
    pub id: String,
    pub regulation_id: String,
    /// Article or paragraph number, e.g. "Article 21".
    pub number: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirement_ids: Vec<String>,
}

/// A category of organization subject to a regulation, e.g. an NIS2
/// "essential entity".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegulatedEntity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub regulation_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sectors: Vec<String>,
    /// Classification criteria.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub criteria: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_format_matches_as_str() {
        for status in RegulationStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn regulation_with_sections_parses() {
        let reg: Regulation = serde_json::from_str(
            r#"{
                "id": "EU-NIS2",
                "name": "Network and Information Security Directive 2",
                "shortName": "NIS2",
                "description": "Cybersecurity baseline",
                "jurisdictionId": "EU",
                "status": "enforceable",
                "sections": [
                    {"id": "NIS2-ART21", "regulationId": "EU-NIS2", "number": "Article 21", "name": "Risk management"}
                ],
                "tags": ["cybersecurity"]
            }"#,
        )
        .unwrap();
        assert_eq!(reg.status, Some(RegulationStatus::Enforceable));
        assert_eq!(reg.sections.len(), 1);
        assert_eq!(reg.sections[0].number, "Article 21");
        assert!(reg.official_url.is_empty());
    }

    #[test]
    fn unknown_status_is_a_parse_error() {
        let result: Result<Regulation, _> = serde_json::from_str(
            r#"{"id": "X", "jurisdictionId": "EU", "status": "repealed"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn status_and_jurisdiction_may_be_absent() {
        let reg: Regulation =
            serde_json::from_str(r#"{"id": "EU-DRAFT", "sections": [{"name": "Scope"}]}"#).unwrap();
        assert_eq!(reg.status, None);
        assert!(reg.jurisdiction_id.is_empty());
        assert!(reg.sections[0].regulation_id.is_empty());
        let out = serde_json::to_value(&reg).unwrap();
        assert!(out.get("status").is_none());
    }
}
