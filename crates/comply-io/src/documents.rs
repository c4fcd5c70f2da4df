//! Companion documents published next to a framework directory.
//!
//! Unlike the collection files, these are loaded on request and a missing
//! file is an error.

use std::path::Path;

use tracing::debug;

use comply_core::{ComplianceAnalysis, ExecutiveOverview};

use crate::error::IoResult;
use crate::json::read_json;

pub const COMPLIANCE_ANALYSIS_FILE: &str = "compliance-analysis.json";
pub const EXECUTIVE_OVERVIEW_FILE: &str = "executive-overview.json";

pub fn load_compliance_analysis(path: &Path) -> IoResult<ComplianceAnalysis> {
    let analysis: ComplianceAnalysis = read_json(path)?;
    debug!(
        path = %path.display(),
        segments = analysis.market_segments.len(),
        "loaded compliance analysis"
    );
    Ok(analysis)
}

pub fn load_executive_overview(path: &Path) -> IoResult<ExecutiveOverview> {
    let overview: ExecutiveOverview = read_json(path)?;
    debug!(
        path = %path.display(),
        segments = overview.segments.len(),
        providers = overview.provider_readiness.len(),
        "loaded executive overview"
    );
    Ok(overview)
}
