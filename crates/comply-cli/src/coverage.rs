//! `comply coverage`: requirement × solution coverage for the configured
//! jurisdictions of interest.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use comply_coverage::{analyze_coverage, CoverageStats};

use crate::config::Config;
use crate::load_framework;
use crate::output::{print_json, rule, OutputFormat};

#[derive(Args, Debug)]
pub struct CoverageArgs {
    /// Framework directory (defaults to the configured dataDir).
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run_coverage(args: &CoverageArgs, config: &Config) -> Result<u8> {
    let cf = load_framework(config.data_dir_or(args.dir.as_deref()))?;
    let stats = analyze_coverage(
        &cf.mappings,
        &cf.solutions,
        &cf.requirements,
        &config.coverage.jurisdictions,
    );
    match args.format {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Table => print!("{}", render_report(&stats)),
    }
    Ok(0)
}

pub fn render_report(stats: &CoverageStats) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(stats, &mut out);
    out
}

fn write_report(stats: &CoverageStats, out: &mut String) -> std::fmt::Result {
    writeln!(out, "=== Compliance Framework Coverage Report ===")?;
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "  Requirements:        {}", stats.total_requirements)?;
    writeln!(out, "  Solutions:           {}", stats.total_solutions)?;
    writeln!(out, "  Total Mappings:      {}", stats.total_mappings)?;
    writeln!(
        out,
        "  With Evidence:       {} ({:.1}%)",
        stats.mappings_with_evidence, stats.evidence_percent
    )?;
    writeln!(out)?;

    writeln!(out, "Coverage by Jurisdiction:")?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<8} {:>8} {:>8} {:>8} {:>10} {:>10} {:>10}",
        "JUR", "SOLS", "MAX", "COVERED", "COVERAGE%", "EVIDENCE", "EVIDENCE%"
    )?;
    writeln!(out, "{}", rule(72))?;
    for jc in &stats.by_jurisdiction {
        writeln!(
            out,
            "{:<8} {:>8} {:>8} {:>8} {:>9.1}% {:>10} {:>9.1}%",
            jc.jurisdiction_id,
            jc.solution_count,
            jc.max_cells,
            jc.covered_cells,
            jc.coverage_percent,
            jc.with_evidence,
            jc.evidence_percent
        )?;
    }
    writeln!(out, "{}", rule(72))?;
    let total = &stats.summary;
    writeln!(
        out,
        "{:<8} {:>8} {:>8} {:>8} {:>9.1}% {:>10} {:>9.1}%",
        "TOTAL",
        "-",
        total.total_max,
        total.total_covered,
        total.coverage_percent,
        total.total_evidence,
        total.evidence_percent
    )?;
    writeln!(out)?;

    writeln!(out, "Gap Analysis:")?;
    for jc in &stats.by_jurisdiction {
        writeln!(
            out,
            "  {}: {} cells missing ({:.1}% gap)",
            jc.jurisdiction_id,
            jc.missing_cells,
            jc.gap_percent()
        )?;
    }
    Ok(())
}
