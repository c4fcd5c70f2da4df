//! `comply list --type <kind>`: one collection of a framework as a table or
//! JSON array.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use comply_core::ComplianceFramework;

use crate::config::Config;
use crate::load_framework;
use crate::output::{print_json, rule, OutputFormat};

/// The collections `list` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ItemType {
    Jurisdictions,
    Regulations,
    Requirements,
    Solutions,
    Mappings,
    /// Zone assignments.
    Zones,
    /// Enforcement assessments.
    Enforcement,
    /// Regulated entity categories.
    Entities,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Framework directory (defaults to the configured dataDir).
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Collection to list.
    #[arg(long = "type", value_enum)]
    pub item_type: ItemType,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run_list(args: &ListArgs, config: &Config) -> Result<u8> {
    let cf = load_framework(config.data_dir_or(args.dir.as_deref()))?;
    match args.format {
        OutputFormat::Json => print_collection_json(&cf, args.item_type)?,
        OutputFormat::Table => print!("{}", render_table(&cf, args.item_type)),
    }
    Ok(0)
}

fn print_collection_json(cf: &ComplianceFramework, item_type: ItemType) -> Result<()> {
    match item_type {
        ItemType::Jurisdictions => print_json(&cf.jurisdictions),
        ItemType::Regulations => print_json(&cf.regulations),
        ItemType::Requirements => print_json(&cf.requirements),
        ItemType::Solutions => print_json(&cf.solutions),
        ItemType::Mappings => print_json(&cf.mappings),
        ItemType::Zones => print_json(&cf.zone_assignments),
        ItemType::Enforcement => print_json(&cf.enforcement_assessments),
        ItemType::Entities => print_json(&cf.regulated_entities),
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Render one collection as a fixed-width table.
pub fn render_table(cf: &ComplianceFramework, item_type: ItemType) -> String {
    let mut out = String::new();
    match item_type {
        ItemType::Jurisdictions => {
            let _ = writeln!(out, "{:<10} {:<30} {:<15} PARENT", "ID", "NAME", "TYPE");
            let _ = writeln!(out, "{}", rule(70));
            for j in &cf.jurisdictions {
                let _ = writeln!(
                    out,
                    "{:<10} {:<30} {:<15} {}",
                    j.id,
                    j.name,
                    j.kind.map_or("", |k| k.as_str()),
                    j.parent().unwrap_or("")
                );
            }
        }
        ItemType::Regulations => {
            let _ = writeln!(out, "{:<20} {:<15} {:<15} JURISDICTION", "ID", "SHORT NAME", "STATUS");
            let _ = writeln!(out, "{}", rule(70));
            for r in &cf.regulations {
                let _ = writeln!(
                    out,
                    "{:<20} {:<15} {:<15} {}",
                    r.id,
                    r.short_name,
                    r.status.map_or("", |s| s.as_str()),
                    r.jurisdiction_id
                );
            }
        }
        ItemType::Requirements => {
            let _ = writeln!(out, "{:<30} {:<20} {:<10} CATEGORY", "ID", "REGULATION", "SEVERITY");
            let _ = writeln!(out, "{}", rule(80));
            for r in &cf.requirements {
                let severity = r.severity.map_or("", |s| s.as_str());
                let _ = writeln!(
                    out,
                    "{:<30} {:<20} {:<10} {}",
                    r.id, r.regulation_id, severity, r.category
                );
            }
        }
        ItemType::Solutions => {
            let _ = writeln!(out, "{:<25} {:<15} {:<15} NAME", "ID", "PROVIDER", "TYPE");
            let _ = writeln!(out, "{}", rule(80));
            for s in &cf.solutions {
                let kind = s.kind.map_or("", |k| k.as_str());
                let _ = writeln!(out, "{:<25} {:<15} {:<15} {}", s.id, s.provider, kind, s.name);
            }
        }
        ItemType::Mappings => {
            let _ = writeln!(out, "{:<35} {:<25} {:<15} ZONE", "REQUIREMENT", "SOLUTION", "COMPLIANCE");
            let _ = writeln!(out, "{}", rule(90));
            for m in &cf.mappings {
                let zone = m.zone.map_or("", |z| z.as_str());
                let _ = writeln!(
                    out,
                    "{:<35} {:<25} {:<15} {}",
                    m.requirement_id, m.solution_id, m.compliance_level, zone
                );
            }
        }
        ItemType::Zones => {
            let _ = writeln!(out, "{:<25} {:<15} {:<10} DATA CATEGORY", "SOLUTION", "JURISDICTION", "ZONE");
            let _ = writeln!(out, "{}", rule(70));
            for za in &cf.zone_assignments {
                let _ = writeln!(
                    out,
                    "{:<25} {:<15} {:<10} {}",
                    za.solution_id,
                    za.jurisdiction_id,
                    za.zone.map_or("", |z| z.as_str()),
                    za.data_category
                );
            }
        }
        ItemType::Enforcement => {
            let _ = writeln!(out, "{:<15} {:<20} {:<12} DATE", "JURISDICTION", "REGULATION", "LIKELIHOOD");
            let _ = writeln!(out, "{}", rule(70));
            for ea in &cf.enforcement_assessments {
                let _ = writeln!(
                    out,
                    "{:<15} {:<20} {:<12} {}",
                    ea.jurisdiction_id,
                    ea.regulation_id,
                    ea.likelihood.map_or("", |l| l.as_str()),
                    ea.assessment_date
                );
            }
        }
        ItemType::Entities => {
            let _ = writeln!(out, "{:<25} {:<20} {:<30} SECTORS", "ID", "REGULATION", "NAME");
            let _ = writeln!(out, "{}", rule(90));
            for e in &cf.regulated_entities {
                let _ = writeln!(
                    out,
                    "{:<25} {:<20} {:<30} {}",
                    e.id,
                    e.regulation_id,
                    e.name,
                    e.sectors.join(", ")
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use comply_core::{
        ComplianceLevel, ComplianceZone, Jurisdiction, JurisdictionType, RequirementMapping,
        Solution, SolutionType, ZoneAssignment,
    };

    fn framework() -> ComplianceFramework {
        let mut cf = ComplianceFramework::new("List", "1.0");
        cf.jurisdictions = vec![
            Jurisdiction::new("EU", "European Union", JurisdictionType::Supranational),
            Jurisdiction::new("FR", "France", JurisdictionType::Country).with_parent("EU"),
        ];
        cf.solutions = vec![Solution::new("sol-a", "Provider A", SolutionType::Commercial)];
        cf.mappings = vec![RequirementMapping::new(
            "M-1",
            "REQ-1",
            "sol-a",
            ComplianceLevel::Partial,
        )];
        cf.zone_assignments = vec![ZoneAssignment::new("ZA-1", "sol-a", "EU", ComplianceZone::Yellow)];
        cf
    }

    #[test]
    fn jurisdiction_table_pads_columns() {
        let text = render_table(&framework(), ItemType::Jurisdictions);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "-".repeat(70));
        assert_eq!(
            lines[3],
            format!("{:<10} {:<30} {:<15} EU", "FR", "France", "country")
        );
        assert!(lines[2].ends_with("supranational   "));
    }

    #[test]
    fn mapping_table_leaves_missing_zone_blank() {
        let text = render_table(&framework(), ItemType::Mappings);
        let row = text.lines().nth(2).unwrap();
        assert_eq!(row, format!("{:<35} {:<25} {:<15} ", "REQ-1", "sol-a", "partial"));
    }

    #[test]
    fn zone_table_row() {
        let text = render_table(&framework(), ItemType::Zones);
        assert!(text.lines().nth(2).unwrap().starts_with(&format!(
            "{:<25} {:<15} {:<10}",
            "sol-a", "EU", "yellow"
        )));
    }

    #[test]
    fn unset_solution_type_renders_blank() {
        let mut cf = framework();
        cf.solutions[0].kind = None;
        let text = render_table(&cf, ItemType::Solutions);
        let row = text.lines().nth(2).unwrap();
        assert_eq!(row, format!("{:<25} {:<15} {:<15} ", "sol-a", "Provider A", ""));
    }

    #[test]
    fn empty_collection_prints_header_only() {
        let text = render_table(&framework(), ItemType::Enforcement);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("JURISDICTION"));
    }

    #[test]
    fn item_type_names() {
        assert_eq!(ItemType::from_str("zones", false).unwrap(), ItemType::Zones);
        assert_eq!(ItemType::from_str("entities", false).unwrap(), ItemType::Entities);
        assert!(ItemType::from_str("widgets", false).is_err());
    }
}
