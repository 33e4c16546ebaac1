//! `buscador` is a library and command-line tool that scans a directory tree
//! of plain-text files for exact, case-sensitive whole-word occurrences of a
//! single keyword, aggregates presence and frequency statistics per file and
//! across the corpus, and emits a JSON report plus a static interactive HTML
//! dashboard.
//!
//! As a library, it provides a sequential three-stage pipeline:
//! 1.  **Discover**: enumerate the qualifying `.txt` files under the root.
//! 2.  **Analyze**: read each file, count words, and match the keyword.
//! 3.  **Report**: aggregate the corpus summary and write the two outputs.
//!
//! # Example: Library Usage
//!
//! ```
//! use buscador::config::ConfigBuilder;
//! use buscador::progress::NoOpProgress;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a small corpus.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("a.txt"), "Un Ejemplo basta.").unwrap();
//! fs::write(temp_dir.path().join("b.txt"), "Nada que ver.").unwrap();
//!
//! // 2. Build the run configuration.
//! let config = ConfigBuilder::new()
//!     .root(temp_dir.path())
//!     .keyword("Ejemplo")
//!     .build()
//!     .unwrap();
//!
//! // 3. Run the analysis.
//! let report = buscador::analyze(&config, &NoOpProgress).unwrap();
//! assert_eq!(report.metadata.total_files, 2);
//! assert_eq!(report.summary.total_mentions, 1);
//! assert_eq!(report.summary.files_with_keyword, 1);
//!
//! // 4. Write the JSON report and the HTML dashboard wherever needed.
//! let json_path = temp_dir.path().join("resultados_busqueda.json");
//! let html_path = temp_dir.path().join("resultados_busqueda.html");
//! buscador::write_reports(&report, &json_path, &html_path).unwrap();
//! assert!(json_path.exists() && html_path.exists());
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod matcher;
pub mod output;
pub mod processing;
pub mod progress;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{AnalysisReport, CorpusSummary, FileResult, Occurrence};
pub use matcher::KeywordMatcher;

use crate::core_types::ReportMetadata;
use crate::errors::{Error, Result};
use crate::progress::ProgressReporter;
use std::path::Path;

/// Runs the full analysis over the configured corpus.
///
/// Walks the root directory, analyzes every qualifying `.txt` file strictly
/// sequentially, and assembles the final report. Files that cannot be read
/// are logged, reported through `progress`, and excluded from all
/// aggregates; the run continues with the remaining files.
///
/// # Errors
/// Returns [`Error::NoTxtFiles`] when the corpus contains no qualifying
/// files. No output is produced in that case.
pub fn analyze(config: &Config, progress: &dyn ProgressReporter) -> Result<AnalysisReport> {
    progress.scanning_directory(&config.root);
    let paths = discovery::find_txt_files(&config.root);
    progress.files_found(paths.len());
    if paths.is_empty() {
        return Err(Error::NoTxtFiles(config.root.clone()));
    }

    let matcher = KeywordMatcher::new(&config.keyword);
    let total = paths.len();
    let mut files = Vec::with_capacity(total);
    for (index, path) in paths.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        progress.processing_file(index + 1, total, &name);

        match processing::analyze_file(path, &matcher) {
            Ok(result) => files.push(result),
            Err(e) => {
                log::warn!("Excluding '{}' from the corpus: {}", path.display(), e);
                progress.file_failed(path, &e.to_string());
            }
        }
    }

    let summary = aggregate::summarize(&files);
    let metadata = ReportMetadata {
        directory: config.root.display().to_string(),
        total_files: files.len(),
        total_words: files.iter().map(|f| f.word_count).sum(),
        analyzed_at: chrono::Local::now().to_rfc3339(),
        keyword: config.keyword.clone(),
    };

    Ok(AnalysisReport {
        metadata,
        summary,
        files,
    })
}

/// Writes the JSON report and the HTML dashboard.
///
/// Both targets are overwritten unconditionally. A failure on either write
/// is fatal; a partially written pair (JSON succeeded, HTML failed) is not
/// rolled back.
pub fn write_reports(report: &AnalysisReport, json_path: &Path, html_path: &Path) -> Result<()> {
    output::write_json_report(report, json_path)?;
    output::write_html_report(report, html_path)?;
    Ok(())
}

/// Executes the complete pipeline the way the binary does: analyze, then
/// write the two fixed-name outputs to the current working directory.
pub fn run(config: &Config, progress: &dyn ProgressReporter) -> Result<AnalysisReport> {
    let report = analyze(config, progress)?;
    write_reports(
        &report,
        Path::new(constants::JSON_OUTPUT_FILE),
        Path::new(constants::HTML_OUTPUT_FILE),
    )?;
    Ok(report)
}
