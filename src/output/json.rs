// src/output/json.rs

//! Serializes the analysis report to the JSON output file.
//!
//! The report is written pretty-printed, UTF-8 encoded, with non-ASCII
//! characters preserved literally. Any existing file at the target path is
//! overwritten; a write failure is fatal and surfaced to the caller with the
//! offending path.

use crate::core_types::AnalysisReport;
use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Writes the full report structure verbatim to `path`.
pub fn write_json_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|e| io_error_with_path(e, path))?;
    debug!("JSON report written to '{}'", path.display());
    Ok(())
}
