//! # `comply import-research`
//!
//! Reads a research submission and does exactly one of the following, in
//! precedence order:
//!
//! 1. `--analyze`: print the analysis report (or its JSON).
//! 2. `--validate`: check findings against the framework in `--dir`; exits 1
//!    when any error is found.
//! 3. `--merge`: reconcile findings with the mappings in `--dir`. The
//!    partition summary goes to stderr so stdout stays machine-readable.
//! 4. Otherwise: convert findings to mappings.
//!
//! `--output` writes the resulting mapping array to a file instead of
//! stdout.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use comply_core::RequirementMapping;
use comply_research::{analyze, merge, validate, MergeOutcome, ResearchInput, ValidationReport};

use crate::load_framework;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct ImportResearchArgs {
    /// Research findings JSON file.
    #[arg(long)]
    pub input: PathBuf,

    /// Write the mappings to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Framework directory. Required by `--validate` and `--merge`.
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Print an analysis report instead of mappings.
    #[arg(long)]
    pub analyze: bool,

    /// Validate the findings against the framework.
    #[arg(long)]
    pub validate: bool,

    /// Merge the findings into the framework's existing mappings.
    #[arg(long)]
    pub merge: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run_import_research(args: &ImportResearchArgs) -> Result<u8> {
    let research: ResearchInput = comply_io::read_json(&args.input)
        .with_context(|| format!("failed to load research file {}", args.input.display()))?;
    info!(
        findings = research.findings.len(),
        research_date = %research.metadata.research_date,
        "loaded research"
    );

    if args.analyze {
        let analysis = analyze(&research);
        match args.format {
            OutputFormat::Json => print_json(&analysis)?,
            OutputFormat::Table => print!("{}", analysis.render_report()),
        }
        return Ok(0);
    }

    if args.validate {
        let dir = required_dir(args, "validation")?;
        let framework = load_framework(dir)?;
        let report = validate(&research.findings, &framework);
        match args.format {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Table => print!("{}", render_validation(&report)),
        }
        return Ok(if report.valid { 0 } else { 1 });
    }

    if args.merge {
        let dir = required_dir(args, "merge")?;
        let framework = load_framework(dir)?;
        let outcome = merge(
            &research.findings,
            &research.metadata.research_date,
            &framework.mappings,
        );
        eprint!("{}", render_merge_summary(&outcome));
        let combined = outcome.into_combined();
        if let Some(path) = &args.output {
            write_mappings(path, &combined)?;
            eprintln!("Wrote {} mappings to {}", combined.len(), path.display());
        } else if args.format == OutputFormat::Json {
            print_json(&combined)?;
        }
        return Ok(0);
    }

    let mappings = research.to_mappings();
    if let Some(path) = &args.output {
        write_mappings(path, &mappings)?;
        println!("Wrote {} mappings to {}", mappings.len(), path.display());
    } else if args.format == OutputFormat::Json {
        print_json(&mappings)?;
    } else {
        print!("{}", render_import_summary(&research));
    }
    Ok(0)
}

fn required_dir<'a>(args: &'a ImportResearchArgs, operation: &str) -> Result<&'a Path> {
    match args.dir.as_deref() {
        Some(dir) => Ok(dir),
        None => bail!("--dir is required for {operation}"),
    }
}

fn write_mappings(path: &Path, mappings: &[RequirementMapping]) -> Result<()> {
    comply_io::write_json(path, mappings, true)
        .with_context(|| format!("failed to write mappings to {}", path.display()))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render_validation(report: &ValidationReport) -> String {
    let mut out = String::new();
    let verdict = if report.valid { "PASSED" } else { "FAILED" };
    let _ = writeln!(out, "Validation {verdict}");
    let _ = writeln!(out, "Checked: {} findings\n", report.total_checked);

    if !report.errors.is_empty() {
        let _ = writeln!(out, "Errors ({}):", report.errors.len());
        for e in &report.errors {
            let _ = write!(out, "  [{}] {}: {}", e.index, e.field, e.message);
            if !e.value.is_empty() {
                let _ = write!(out, " (value: {})", e.value);
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out);
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "Warnings ({}):", report.warnings.len());
        for (message, count) in report.grouped_warnings() {
            let _ = writeln!(out, "  {message} (x{count})");
        }
    }
    out
}

pub fn render_merge_summary(outcome: &MergeOutcome) -> String {
    format!(
        "Merge Summary:\n  New mappings:       {}\n  Updated mappings:   {}\n  Unchanged mappings: {}\n",
        outcome.new.len(),
        outcome.updated.len(),
        outcome.unchanged.len()
    )
}

pub fn render_import_summary(research: &ResearchInput) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Research Import Summary");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(out, "Research Date: {}", research.metadata.research_date);
    let _ = writeln!(out, "Researcher:    {}", research.metadata.researcher);
    let _ = writeln!(out, "Findings:      {}", research.findings.len());
    let _ = writeln!(
        out,
        "\nUse --format json to output mappings JSON, or --output to write to file"
    );
    out
}
