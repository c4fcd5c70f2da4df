//! # External References
//!
//! Pointers from catalog records to outside material: URLs, legal
//! citations, other regulations, or technical standards.

use serde::{Deserialize, Serialize};

/// The kind of external reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalRefType {
    Url,
    Citation,
    Regulation,
    Standard,
}

wire_enum!(ExternalRefType, "external reference type", {
    Url => "url",
    Citation => "citation",
    Regulation => "regulation",
    Standard => "standard",
});

/// A reference to an external resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalRef {
    #[serde(rename = "type")]
    pub kind: ExternalRefType,
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_format_matches_as_str() {
        for kind in ExternalRefType::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn parses_minimal_reference() {
        let r: ExternalRef =
            serde_json::from_str(r#"{"type": "url", "value": "https://eur-lex.europa.eu"}"#)
                .unwrap();
        assert_eq!(r.kind, ExternalRefType::Url);
        assert!(r.name.is_empty());
    }
}
