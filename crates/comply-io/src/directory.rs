//! # Framework Directory Load and Save
//!
//! A framework on disk is a directory of JSON documents, one array per
//! collection, plus `framework.json` for the descriptive metadata:
//!
//! | File | Collection |
//! |---|---|
//! | `jurisdictions.json` | jurisdictions |
//! | `regulations.json` | regulations |
//! | `requirements.json` | requirements |
//! | `entities.json` | regulated entities |
//! | `solutions.json` | solutions |
//! | `zone-assignments.json` | zone assignments |
//! | `mappings.json` | requirement mappings |
//! | `enforcement.json` | enforcement assessments |
//! | `framework.json` | name, version, description, last updated |
//!
//! Any individual file may be absent and is then treated as zero records.
//! A file that is present but unreadable or malformed fails the whole load;
//! there is no partial result.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use comply_core::{ComplianceFramework, FrameworkMetadata};

use crate::error::{IoError, IoResult};
use crate::json::{read_json, write_json};

pub const JURISDICTIONS_FILE: &str = "jurisdictions.json";
pub const REGULATIONS_FILE: &str = "regulations.json";
pub const REQUIREMENTS_FILE: &str = "requirements.json";
pub const ENTITIES_FILE: &str = "entities.json";
pub const SOLUTIONS_FILE: &str = "solutions.json";
pub const ZONE_ASSIGNMENTS_FILE: &str = "zone-assignments.json";
pub const MAPPINGS_FILE: &str = "mappings.json";
pub const ENFORCEMENT_FILE: &str = "enforcement.json";
pub const METADATA_FILE: &str = "framework.json";

/// Read one optional document. A missing file yields `None`.
fn load_optional<T: DeserializeOwned>(dir: &Path, file: &str) -> IoResult<Option<T>> {
    let path = dir.join(file);
    if !path.exists() {
        debug!(file, "not present, skipping");
        return Ok(None);
    }
    let value = read_json(&path)?;
    debug!(file, "loaded");
    Ok(Some(value))
}

fn load_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> IoResult<Vec<T>> {
    Ok(load_optional::<Vec<T>>(dir, file)?.unwrap_or_default())
}

/// Load a complete framework from a directory of JSON documents.
pub fn load_framework_from_dir(dir: &Path) -> IoResult<ComplianceFramework> {
    if !dir.is_dir() {
        return Err(IoError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let framework = ComplianceFramework {
        metadata: load_optional::<FrameworkMetadata>(dir, METADATA_FILE)?.unwrap_or_default(),
        jurisdictions: load_collection(dir, JURISDICTIONS_FILE)?,
        regulations: load_collection(dir, REGULATIONS_FILE)?,
        requirements: load_collection(dir, REQUIREMENTS_FILE)?,
        regulated_entities: load_collection(dir, ENTITIES_FILE)?,
        solutions: load_collection(dir, SOLUTIONS_FILE)?,
        zone_assignments: load_collection(dir, ZONE_ASSIGNMENTS_FILE)?,
        mappings: load_collection(dir, MAPPINGS_FILE)?,
        enforcement_assessments: load_collection(dir, ENFORCEMENT_FILE)?,
    };

    let stats = framework.stats();
    debug!(
        dir = %dir.display(),
        requirements = stats.requirements,
        solutions = stats.solutions,
        mappings = stats.mappings,
        "framework loaded"
    );
    Ok(framework)
}

/// Save a framework to a directory, creating it if absent.
///
/// Every collection file is written, including empty ones, so a saved
/// directory always contains the full file set.
pub fn save_framework_to_dir(framework: &ComplianceFramework, dir: &Path) -> IoResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| IoError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    write_json(&dir.join(JURISDICTIONS_FILE), &framework.jurisdictions, true)?;
    write_json(&dir.join(REGULATIONS_FILE), &framework.regulations, true)?;
    write_json(&dir.join(REQUIREMENTS_FILE), &framework.requirements, true)?;
    write_json(&dir.join(ENTITIES_FILE), &framework.regulated_entities, true)?;
    write_json(&dir.join(SOLUTIONS_FILE), &framework.solutions, true)?;
    write_json(&dir.join(ZONE_ASSIGNMENTS_FILE), &framework.zone_assignments, true)?;
    write_json(&dir.join(MAPPINGS_FILE), &framework.mappings, true)?;
    write_json(&dir.join(ENFORCEMENT_FILE), &framework.enforcement_assessments, true)?;
    write_json(&dir.join(METADATA_FILE), &framework.metadata, true)?;

    debug!(dir = %dir.display(), "framework saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use comply_core::{
        ComplianceLevel, ComplianceZone, Jurisdiction, JurisdictionType, RequirementMapping,
        Solution, SolutionType, ZoneAssignment,
    };

    #[test]
    fn empty_directory_loads_empty_framework() {
        let dir = tempfile::tempdir().unwrap();
        let cf = load_framework_from_dir(dir.path()).unwrap();
        assert_eq!(cf, ComplianceFramework::default());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_framework_from_dir(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, IoError::NotADirectory { .. }));
    }

    #[test]
    fn loads_only_present_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SOLUTIONS_FILE),
            r#"[{"id": "cloud-provider-a", "name": "A", "provider": "A", "type": "commercial", "jurisdictionIds": ["EU"]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(ZONE_ASSIGNMENTS_FILE),
            r#"[{"id": "ZA-1", "solutionId": "cloud-provider-a", "jurisdictionId": "EU", "zone": "yellow"}]"#,
        )
        .unwrap();

        let cf = load_framework_from_dir(dir.path()).unwrap();
        assert_eq!(cf.solutions.len(), 1);
        assert!(cf.mappings.is_empty());
        let za = cf.zone_assignments_for_solution("cloud-provider-a");
        assert_eq!(za.len(), 1);
        assert_eq!(za[0].zone, Some(ComplianceZone::Yellow));
    }

    #[test]
    fn malformed_collection_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MAPPINGS_FILE), "{not json").unwrap();
        let err = load_framework_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains(MAPPINGS_FILE));
    }

    #[test]
    fn malformed_metadata_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(METADATA_FILE), "[]").unwrap();
        assert!(load_framework_from_dir(dir.path()).is_err());
    }

    #[test]
    fn save_then_load_preserves_framework() {
        let mut cf = ComplianceFramework::new("Round Trip", "1.2.0");
        cf.metadata.last_updated = "2025-01-15".into();
        cf.jurisdictions = vec![Jurisdiction::new("EU", "European Union", JurisdictionType::Supranational)];
        cf.solutions = vec![Solution::new("sol-a", "A", SolutionType::Sovereign).available_in(["EU"])];
        cf.zone_assignments = vec![ZoneAssignment::new("ZA-1", "sol-a", "EU", ComplianceZone::Green)];
        let mut mapping =
            RequirementMapping::new("M-1", "REQ-1", "sol-a", ComplianceLevel::Other("tbd".into()));
        mapping.conditions = "pending audit".into();
        cf.mappings = vec![mapping];

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("framework");
        save_framework_to_dir(&cf, &out).unwrap();

        assert!(out.join(ENFORCEMENT_FILE).exists());
        let back = load_framework_from_dir(&out).unwrap();
        assert_eq!(back, cf);
    }
}
