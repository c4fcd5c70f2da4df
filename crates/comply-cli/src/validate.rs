//! `comply validate <DIR>`: referential integrity of a framework.
//!
//! Exits 1 when any reference is dangling. A directory that fails to load
//! is a hard error, not a validation result.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use comply_core::ReferenceIssue;

use crate::load_framework;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Framework directory.
    pub dir: PathBuf,

    /// Output format. JSON prints the issue list (empty when valid).
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let cf = load_framework(&args.dir)?;
    let issues = cf.check_references();
    info!(issues = issues.len(), "reference check complete");
    match args.format {
        OutputFormat::Json => print_json(&issues)?,
        OutputFormat::Table => print!("{}", render_issues(&issues)),
    }
    Ok(if issues.is_empty() { 0 } else { 1 })
}

pub fn render_issues(issues: &[ReferenceIssue]) -> String {
    if issues.is_empty() {
        return "Validation passed!\n".to_string();
    }
    let mut out = String::from("Validation errors found:\n");
    for issue in issues {
        let _ = writeln!(out, "  - {issue}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use comply_core::{ComplianceFramework, ComplianceLevel, RequirementMapping};

    #[test]
    fn passes_when_clean() {
        assert_eq!(render_issues(&[]), "Validation passed!\n");
    }

    #[test]
    fn lists_every_issue() {
        let mut cf = ComplianceFramework::new("V", "1");
        cf.mappings.push(RequirementMapping::new(
            "M-1",
            "REQ-404",
            "sol-404",
            ComplianceLevel::Compliant,
        ));
        let text = render_issues(&cf.check_references());
        assert_eq!(
            text,
            "Validation errors found:\n  \
             - Mapping M-1 references unknown solution: sol-404\n  \
             - Mapping M-1 references unknown requirement: REQ-404\n"
        );
    }

    #[test]
    fn exit_code_reflects_issues() {
        let dir = tempfile::tempdir().unwrap();
        let mut cf = ComplianceFramework::new("V", "1");
        comply_io::save_framework_to_dir(&cf, dir.path()).unwrap();
        let args = ValidateArgs {
            dir: dir.path().to_path_buf(),
            format: OutputFormat::Json,
        };
        assert_eq!(run_validate(&args).unwrap(), 0);

        cf.mappings.push(RequirementMapping::new(
            "M-1",
            "REQ-404",
            "sol-404",
            ComplianceLevel::Compliant,
        ));
        comply_io::save_framework_to_dir(&cf, dir.path()).unwrap();
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            dir: dir.path().join("nope"),
            format: OutputFormat::Table,
        };
        assert!(run_validate(&args).is_err());
    }
}
