//! `comply query`: mappings for one solution or one requirement.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use comply_core::{ComplianceFramework, RequirementMapping};

use crate::config::Config;
use crate::load_framework;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Framework directory (defaults to the configured dataDir).
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Solution ID to query. Takes precedence over `--requirement`.
    #[arg(long, required_unless_present = "requirement")]
    pub solution: Option<String>,

    /// Requirement ID to query.
    #[arg(long)]
    pub requirement: Option<String>,

    /// Keep only mappings that apply in this jurisdiction. Unscoped
    /// mappings apply everywhere.
    #[arg(long)]
    pub jurisdiction: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run_query(args: &QueryArgs, config: &Config) -> Result<u8> {
    let cf = load_framework(config.data_dir_or(args.dir.as_deref()))?;
    let mappings = select_mappings(&cf, args);
    debug!(count = mappings.len(), "query matched mappings");
    match args.format {
        OutputFormat::Json => print_json(&mappings)?,
        OutputFormat::Table => print!("{}", render_mappings(&mappings)),
    }
    Ok(0)
}

/// The mappings a query selects, in load order.
pub fn select_mappings<'a>(cf: &'a ComplianceFramework, args: &QueryArgs) -> Vec<&'a RequirementMapping> {
    let mut mappings = match (&args.solution, &args.requirement) {
        (Some(solution), _) => cf.mappings_for_solution(solution),
        (None, Some(requirement)) => cf.mappings_for_requirement(requirement),
        (None, None) => Vec::new(),
    };
    if let Some(jurisdiction) = &args.jurisdiction {
        mappings.retain(|m| m.applies_to(jurisdiction));
    }
    mappings
}

pub fn render_mappings(mappings: &[&RequirementMapping]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found {} mappings\n", mappings.len());
    for m in mappings {
        let _ = writeln!(out, "ID: {}", m.id);
        let _ = writeln!(out, "  Requirement: {}", m.requirement_id);
        let _ = writeln!(out, "  Solution:    {}", m.solution_id);
        let _ = writeln!(out, "  Compliance:  {}", m.compliance_level);
        if let Some(zone) = m.zone {
            let _ = writeln!(out, "  Zone:        {zone}");
        }
        if !m.jurisdiction_ids.is_empty() {
            let _ = writeln!(out, "  Jurisdictions: {}", m.jurisdiction_ids.join(", "));
        }
        if !m.notes.is_empty() {
            let _ = writeln!(out, "  Notes:       {}", m.notes);
        }
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use comply_core::{ComplianceLevel, ComplianceZone};

    fn framework() -> ComplianceFramework {
        let mut cf = ComplianceFramework::new("Query", "1.0");
        let mut eu = RequirementMapping::new("M-1", "REQ-1", "sol-a", ComplianceLevel::Compliant)
            .scoped_to(["EU"]);
        eu.zone = Some(ComplianceZone::Green);
        eu.notes = "Sovereign region".into();
        cf.mappings = vec![
            eu,
            RequirementMapping::new("M-2", "REQ-2", "sol-a", ComplianceLevel::Partial),
            RequirementMapping::new("M-3", "REQ-1", "sol-b", ComplianceLevel::NonCompliant)
                .scoped_to(["KSA"]),
        ];
        cf
    }

    fn args(solution: Option<&str>, requirement: Option<&str>, jurisdiction: Option<&str>) -> QueryArgs {
        QueryArgs {
            dir: None,
            solution: solution.map(String::from),
            requirement: requirement.map(String::from),
            jurisdiction: jurisdiction.map(String::from),
            format: OutputFormat::Table,
        }
    }

    fn ids(mappings: &[&RequirementMapping]) -> Vec<String> {
        mappings.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn solution_wins_over_requirement() {
        let cf = framework();
        let got = select_mappings(&cf, &args(Some("sol-a"), Some("REQ-1"), None));
        assert_eq!(ids(&got), vec!["M-1", "M-2"]);
    }

    #[test]
    fn requirement_query() {
        let cf = framework();
        let got = select_mappings(&cf, &args(None, Some("REQ-1"), None));
        assert_eq!(ids(&got), vec!["M-1", "M-3"]);
    }

    #[test]
    fn jurisdiction_filter_keeps_unscoped_mappings() {
        let cf = framework();
        let got = select_mappings(&cf, &args(Some("sol-a"), None, Some("FR")));
        assert_eq!(ids(&got), vec!["M-2"]);
        let got = select_mappings(&cf, &args(None, Some("REQ-1"), Some("KSA")));
        assert_eq!(ids(&got), vec!["M-3"]);
    }

    #[test]
    fn render_includes_optional_lines_only_when_set() {
        let cf = framework();
        let selected = select_mappings(&cf, &args(Some("sol-a"), None, None));
        let text = render_mappings(&selected);
        assert!(text.starts_with("Found 2 mappings\n\nID: M-1\n"));
        assert!(text.contains("  Zone:        green\n  Jurisdictions: EU\n  Notes:       Sovereign region\n\n"));
        assert!(text.contains("ID: M-2\n  Requirement: REQ-2\n  Solution:    sol-a\n  Compliance:  partial\n\n"));
    }

    #[test]
    fn render_empty() {
        assert_eq!(render_mappings(&[]), "Found 0 mappings\n\n");
    }
}
