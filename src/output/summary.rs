// src/output/summary.rs

//! Writes the closing run summary to an output sink.

use crate::constants::{HTML_OUTPUT_FILE, JSON_OUTPUT_FILE};
use crate::core_types::AnalysisReport;
use crate::output::{format_stat, format_thousands};
use std::io::{self, Write};

/// Writes the final human-readable summary block for a completed run.
pub fn write_run_summary(writer: &mut dyn Write, report: &AnalysisReport) -> io::Result<()> {
    let meta = &report.metadata;
    let summary = &report.summary;

    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "ANÁLISIS COMPLETADO")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "Total archivos: {}", meta.total_files)?;
    writeln!(
        writer,
        "Archivos con \"{}\": {} ({}%)",
        meta.keyword,
        summary.files_with_keyword,
        format_stat(summary.percent_with_keyword)
    )?;
    writeln!(
        writer,
        "Archivos sin \"{}\": {} ({}%)",
        meta.keyword,
        summary.files_without_keyword,
        format_stat(summary.percent_without_keyword)
    )?;
    writeln!(writer, "Total menciones: {}", summary.total_mentions)?;
    writeln!(
        writer,
        "Frecuencia: {} menciones por millón de palabras",
        format_stat(summary.frequency_per_million)
    )?;
    writeln!(
        writer,
        "Total palabras procesadas: {}",
        format_thousands(meta.total_words)
    )?;
    writeln!(writer)?;
    writeln!(writer, "Archivos generados:")?;
    writeln!(writer, "   - {} (página web interactiva)", HTML_OUTPUT_FILE)?;
    writeln!(writer, "   - {} (datos completos)", JSON_OUTPUT_FILE)?;
    Ok(())
}
