//! # comply-core — Foundational Types for the Compliance Catalog
//!
//! This crate is the leaf of the workspace. It defines the typed records that
//! make up a compliance framework, the in-memory store that holds them once
//! loaded, and the companion analysis and executive overview documents.
//! Every other crate depends on `comply-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerations.** Zones, severities, statuses, solution types and
//!    likelihoods are enums with exhaustive `match`. The single exception is
//!    [`ComplianceLevel`], which carries an `Other` variant so unrecognized
//!    statuses are preserved rather than rejected.
//!
//! 2. **Read-only store.** [`ComplianceFramework`] is built once per process
//!    and only queried afterwards. Lookups return `Option`, relationship
//!    queries return (possibly empty) vectors in load order.
//!
//! 3. **Problems are data.** Dangling references are reported by
//!    [`ComplianceFramework::check_references`] as structured values; loading
//!    never fails because of them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `comply-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public record types derive `Debug`, `Clone`, `Serialize`, `Deserialize`.

/// Implements `ALL`, `as_str()`, `Display` and `FromStr` for a closed
/// enumeration from a single variant-to-wire-string table. The serde
/// `rename_all` attribute on each enum must produce the same strings; every
/// enum module has a test asserting that.
macro_rules! wire_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The wire-format string for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ComplyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($ty::$variant),)+
                    other => Err($crate::error::ComplyError::invalid(
                        $kind,
                        other,
                        &[$($wire),+],
                    )),
                }
            }
        }
    };
}

pub mod analysis;
pub mod confidence;
pub mod enforcement;
pub mod error;
pub mod external_ref;
pub mod framework;
pub mod integrity;
pub mod jurisdiction;
pub mod mapping;
pub mod overview;
pub mod regulation;
pub mod requirement;
pub mod solution;
pub mod zone;

// Re-export primary types for ergonomic imports.
pub use analysis::ComplianceAnalysis;
pub use confidence::Confidence;
pub use enforcement::{EnforcementAction, EnforcementAssessment, EnforcementLikelihood};
pub use error::ComplyError;
pub use external_ref::{ExternalRef, ExternalRefType};
pub use framework::{ComplianceFramework, FrameworkMetadata, FrameworkStats};
pub use integrity::{ReferenceIssue, RecordKind};
pub use jurisdiction::{Jurisdiction, JurisdictionType};
pub use mapping::{ComplianceLevel, RequirementMapping};
pub use overview::ExecutiveOverview;
pub use regulation::{RegulatedEntity, Regulation, RegulationStatus, Section};
pub use requirement::{Applicability, Requirement, RequirementSeverity};
pub use solution::{OwnershipStructure, Solution, SolutionType};
pub use zone::{ComplianceZone, ZoneAssignment};
