//! # comply-cli — Command-Line Interface for the Compliance Catalog
//!
//! Provides the `comply` binary.
//!
//! ## Subcommands
//!
//! - `comply load <DIR>`: framework metadata and record counts.
//! - `comply list --type <kind>`: one collection as a table or JSON.
//! - `comply query --solution <id> | --requirement <id>`: mappings for a
//!   solution or requirement, optionally filtered by `--jurisdiction`.
//! - `comply validate <DIR>`: referential integrity of a framework.
//! - `comply coverage`: requirement × solution coverage per jurisdiction.
//! - `comply import-research --input <file>`: convert, analyze, validate or
//!   merge research findings.
//!
//! ```bash
//! comply load fixtures/minimal
//! comply list --dir fixtures/minimal --type regulations
//! comply query --dir fixtures/minimal --solution cloud-provider-a
//! comply coverage --dir fixtures/minimal --format json
//! comply import-research --input research.json --dir fixtures/minimal --merge --output mappings.json
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success. `1` on any load failure, failed validation, or argument
//! error.

pub mod config;
pub mod coverage;
pub mod list;
pub mod load;
pub mod output;
pub mod query;
pub mod research;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use comply_core::ComplianceFramework;

/// Load a framework directory, attaching the directory to any error.
pub fn load_framework(dir: &Path) -> Result<ComplianceFramework> {
    comply_io::load_framework_from_dir(dir)
        .with_context(|| format!("failed to load framework from {}", dir.display()))
}
