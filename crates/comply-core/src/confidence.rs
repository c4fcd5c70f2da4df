//! Confidence attached to research findings and forecast solution statuses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

wire_enum!(Confidence, "confidence", {
    High => "high",
    Medium => "medium",
    Low => "low",
});
