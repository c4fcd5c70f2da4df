//! # Compliance Zones
//!
//! Zones classify the compliance posture of a solution in a jurisdiction,
//! from strictest to most permissive:
//!
//! - **red**: full sovereignty required, foreign hyperscalers excluded.
//! - **yellow**: trustee or partner operating models are acceptable.
//! - **green**: commercial cloud is acceptable with proper controls.

use serde::{Deserialize, Serialize};

/// Zone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceZone {
    Red,
    Yellow,
    Green,
}

wire_enum!(ComplianceZone, "zone", {
    Red => "red",
    Yellow => "yellow",
    Green => "green",
});

/// The zone of one solution in one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneAssignment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub solution_id: String,
    #[serde(default)]
    pub jurisdiction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ComplianceZone>,
    /// e.g. "essential", "personal", "general".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data_category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub entity_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rationale: String,
    /// Regulations driving this zone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regulation_ids: Vec<String>,
}

impl ZoneAssignment {
    pub fn new(
        id: impl Into<String>,
        solution_id: impl Into<String>,
        jurisdiction_id: impl Into<String>,
        zone: ComplianceZone,
    ) -> Self {
        Self {
            id: id.into(),
            solution_id: solution_id.into(),
            jurisdiction_id: jurisdiction_id.into(),
            zone: Some(zone),
            data_category: String::new(),
            entity_type: String::new(),
            rationale: String::new(),
            regulation_ids: Vec::new(),
        }
    }
}
