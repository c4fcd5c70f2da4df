//! # comply-research — Research Finding Import
//!
//! Turns researcher-submitted findings into catalog mappings. Four
//! operations, all pure:
//!
//! - **Canonicalize** ([`ResearchInput::to_mappings`]): one mapping per
//!   finding, ids `MAP-RESEARCH-0001` onward, status mapped through
//!   [`comply_core::ComplianceLevel::from_status`].
//! - **Validate** ([`validate`]): structural errors and unknown-reference
//!   warnings against a loaded framework.
//! - **Merge** ([`merge`]): reconcile findings with existing mappings into
//!   new, updated and unchanged sets.
//! - **Analyze** ([`analyze`]): breakdowns and a plain-text report.
//!
//! ## Crate Policy
//!
//! - Depends only on `comply-core`. Reading the research file is the
//!   caller's concern.
//! - No `.unwrap()` outside tests.

pub mod analysis;
pub mod finding;
pub mod merge;
pub mod validation;

pub use analysis::{analyze, ResearchAnalysis};
pub use finding::{Confidence, ResearchFinding, ResearchInput, ResearchMetadata};
pub use merge::{merge, MergeOutcome};
pub use validation::{validate, ValidationIssue, ValidationReport};
