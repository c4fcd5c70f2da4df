//! # Jurisdiction Types
//!
//! A jurisdiction is the legal context a regulation, zone assignment or
//! mapping is scoped to: a country ("FR"), a region, or a supranational body
//! ("EU"). Jurisdictions form a shallow, author-curated tree through
//! `parent_id`. No cycle detection is performed on that tree.

use serde::{Deserialize, Serialize};

/// The kind of jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JurisdictionType {
    /// A sovereign country.
    Country,
    /// A sub-national or multi-country region.
    Region,
    /// A supranational body such as the EU.
    Supranational,
}

wire_enum!(JurisdictionType, "jurisdiction type", {
    Country => "country",
    Region => "region",
    Supranational => "supranational",
});

/// A legal jurisdiction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Jurisdiction {
    /// Identifier, e.g. "EU", "UK", "KSA", "FR".
    pub id: String,
    /// Display name, e.g. "European Union".
    pub name: String,
    /// Country, region, or supranational body.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<JurisdictionType>,
    /// ISO 3166 country code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iso3166: String,
    /// Enclosing jurisdiction, e.g. "DE" -> "EU".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_id: String,
    /// For regions: member country identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Jurisdiction {
    /// Create a jurisdiction with only the required fields populated.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: JurisdictionType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: Some(kind),
            iso3166: String::new(),
            parent_id: String::new(),
            member_ids: Vec::new(),
            description: String::new(),
        }
    }

    /// Set the parent jurisdiction.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = parent_id.into();
        self
    }

    /// The parent jurisdiction identifier, if any.
    pub fn parent(&self) -> Option<&str> {
        if self.parent_id.is_empty() {
            None
        } else {
            Some(&self.parent_id)
        }
    }
}
