//! # comply-io — Catalog Document I/O
//!
//! Reads and writes the plain JSON documents a compliance framework is
//! persisted as. The pure crates (`comply-core`, `comply-research`,
//! `comply-coverage`) never touch the filesystem; everything that does lives
//! here.
//!
//! ## Error Policy
//!
//! Load failures are fatal to the operation and surface immediately as
//! [`IoError`] with the offending path. Absent collection files are not
//! failures. The companion analysis and overview documents are read one
//! file at a time and must exist.

pub mod directory;
pub mod documents;
pub mod error;
pub mod json;

pub use directory::{load_framework_from_dir, save_framework_to_dir};
pub use documents::{load_compliance_analysis, load_executive_overview};
pub use error::{IoError, IoResult};
pub use json::{read_json, to_json_string, write_json};
