//! `comply load <DIR>`: framework metadata and record counts.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use comply_core::ComplianceFramework;

use crate::load_framework;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Framework directory.
    pub dir: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run_load(args: &LoadArgs) -> Result<u8> {
    let cf = load_framework(&args.dir)?;
    let stats = cf.stats();
    info!(
        name = cf.name(),
        mappings = stats.mappings,
        "loaded framework"
    );
    match args.format {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Table => print!("{}", render_summary(&cf)),
    }
    Ok(0)
}

pub fn render_summary(cf: &ComplianceFramework) -> String {
    let stats = cf.stats();
    let mut out = String::new();
    let _ = writeln!(out, "Compliance Framework: {} (v{})", cf.name(), cf.version());
    if !cf.metadata.description.is_empty() {
        let _ = writeln!(out, "Description: {}", cf.metadata.description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Statistics:");
    for (label, count) in [
        ("Jurisdictions:", stats.jurisdictions),
        ("Regulations:", stats.regulations),
        ("Requirements:", stats.requirements),
        ("Entities:", stats.regulated_entities),
        ("Solutions:", stats.solutions),
        ("Zone Assignments:", stats.zone_assignments),
        ("Mappings:", stats.mappings),
        ("Enforcement:", stats.enforcement_assessments),
    ] {
        let _ = writeln!(out, "  {label:<18}{count}");
    }
    out
}
