//! Locations of the fixture data shared by the integration suites.

use std::path::PathBuf;

/// The workspace `fixtures/` directory.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
}

/// The minimal framework: three jurisdictions, one regulation, two
/// providers.
pub fn minimal_framework_dir() -> PathBuf {
    fixtures_root().join("minimal")
}

/// A research submission written against the minimal framework.
pub fn research_findings_file() -> PathBuf {
    fixtures_root().join("research").join("findings.json")
}
