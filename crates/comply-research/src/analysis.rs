//! # Research Analysis
//!
//! Summary statistics over a research submission, used to review a file
//! before it is validated or merged. All breakdowns are ordered maps and all
//! identifier lists are sorted, so the rendered report is reproducible.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use serde::Serialize;

use crate::finding::ResearchInput;

/// Confidence bucket for findings that do not state one.
pub const UNSPECIFIED_CONFIDENCE: &str = "unspecified";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchAnalysis {
    pub total_findings: usize,
    pub unique_controls: usize,
    pub unique_solutions: usize,
    pub status_breakdown: BTreeMap<String, usize>,
    /// Findings without a zone are not counted.
    pub zone_breakdown: BTreeMap<String, usize>,
    pub confidence_breakdown: BTreeMap<String, usize>,
    pub control_ids: Vec<String>,
    pub solution_ids: Vec<String>,
    pub jurisdiction_ids: Vec<String>,
    pub findings_by_solution: BTreeMap<String, usize>,
    pub findings_by_control: BTreeMap<String, usize>,
    pub missing_evidence: usize,
    pub with_evidence: usize,
}

/// Analyze a research submission.
pub fn analyze(input: &ResearchInput) -> ResearchAnalysis {
    let mut analysis = ResearchAnalysis {
        total_findings: input.findings.len(),
        ..ResearchAnalysis::default()
    };

    let mut controls = BTreeSet::new();
    let mut solutions = BTreeSet::new();
    let mut jurisdictions = BTreeSet::new();

    for f in &input.findings {
        *analysis.status_breakdown.entry(f.status.clone()).or_insert(0) += 1;

        if let Some(zone) = f.zone_str() {
            *analysis.zone_breakdown.entry(zone.to_string()).or_insert(0) += 1;
        }

        let confidence = f
            .confidence
            .map_or(UNSPECIFIED_CONFIDENCE, |c| c.as_str());
        *analysis
            .confidence_breakdown
            .entry(confidence.to_string())
            .or_insert(0) += 1;

        controls.insert(f.control_id.clone());
        solutions.insert(f.solution_id.clone());
        jurisdictions.extend(f.jurisdiction_ids.iter().cloned());

        *analysis
            .findings_by_solution
            .entry(f.solution_id.clone())
            .or_insert(0) += 1;
        *analysis
            .findings_by_control
            .entry(f.control_id.clone())
            .or_insert(0) += 1;

        if f.evidence.is_empty() {
            analysis.missing_evidence += 1;
        } else {
            analysis.with_evidence += 1;
        }
    }

    analysis.unique_controls = controls.len();
    analysis.unique_solutions = solutions.len();
    analysis.control_ids = controls.into_iter().collect();
    analysis.solution_ids = solutions.into_iter().collect();
    analysis.jurisdiction_ids = jurisdictions.into_iter().collect();
    analysis
}

impl ResearchAnalysis {
    fn percent(&self, count: usize) -> f64 {
        if self.total_findings == 0 {
            0.0
        } else {
            count as f64 / self.total_findings as f64 * 100.0
        }
    }

    /// Render the plain-text analysis report.
    pub fn render_report(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_report(&mut out);
        out
    }

    fn write_report(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "Research Analysis Report")?;
        writeln!(out, "========================")?;
        writeln!(out)?;
        writeln!(out, "Total Findings: {}", self.total_findings)?;
        writeln!(out, "Unique Controls: {}", self.unique_controls)?;
        writeln!(out, "Unique Solutions: {}", self.unique_solutions)?;
        writeln!(out, "Jurisdictions: {}", self.jurisdiction_ids.join(", "))?;
        writeln!(out)?;

        writeln!(out, "Status Breakdown:")?;
        for (status, count) in &self.status_breakdown {
            writeln!(out, "  {:<15} {} ({:.1}%)", status, count, self.percent(*count))?;
        }
        writeln!(out)?;

        writeln!(out, "Zone Breakdown:")?;
        for (zone, count) in &self.zone_breakdown {
            writeln!(out, "  {:<10} {} ({:.1}%)", zone, count, self.percent(*count))?;
        }
        writeln!(out)?;

        writeln!(out, "Confidence Breakdown:")?;
        for (confidence, count) in &self.confidence_breakdown {
            writeln!(out, "  {:<12} {} ({:.1}%)", confidence, count, self.percent(*count))?;
        }
        writeln!(out)?;

        writeln!(out, "Evidence Coverage:")?;
        writeln!(
            out,
            "  With Evidence:    {} ({:.1}%)",
            self.with_evidence,
            self.percent(self.with_evidence)
        )?;
        writeln!(
            out,
            "  Missing Evidence: {} ({:.1}%)",
            self.missing_evidence,
            self.percent(self.missing_evidence)
        )?;
        writeln!(out)?;

        writeln!(out, "Findings by Solution:")?;
        for (solution, count) in &self.findings_by_solution {
            writeln!(out, "  {:<25} {}", solution, count)?;
        }
        writeln!(out)?;

        writeln!(out, "Control IDs ({}):", self.control_ids.len())?;
        for control in &self.control_ids {
            writeln!(out, "  {control}")?;
        }
        Ok(())
    }
}
