//! Defines core data structures used throughout the analysis pipeline.
//!
//! These types model the single report artifact: per-occurrence context,
//! per-file results, the corpus-wide summary, and the report metadata.
//! Serialized field names follow the Spanish JSON contract consumed by the
//! LexiMus tooling, so every struct carries explicit `serde(rename)`
//! attributes.

use serde::{Deserialize, Serialize};

/// A single whole-word match of the keyword inside one file.
///
/// # Examples
///
/// ```
/// use buscador::core_types::Occurrence;
///
/// let occ = Occurrence {
///     text: "una mención de Ejemplo en contexto".to_string(),
///     position: 15,
///     word: "Ejemplo".to_string(),
/// };
/// assert_eq!(occ.word, "Ejemplo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Surrounding context, clamped to the file boundaries, trimmed and with
    /// internal whitespace runs collapsed to single spaces.
    #[serde(rename = "texto")]
    pub text: String,
    /// Byte offset of the match start within the decoded file content.
    #[serde(rename = "posicion")]
    pub position: usize,
    /// The matched literal substring.
    #[serde(rename = "palabra")]
    pub word: String,
}

/// Whether a file contains the keyword. Used as the row category tag for the
/// dashboard's client-side filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    WithKeyword,
    WithoutKeyword,
}

impl Presence {
    /// The `data-filter` tag value used by the dashboard table rows.
    pub fn filter_tag(self) -> &'static str {
        match self {
            Presence::WithKeyword => "con",
            Presence::WithoutKeyword => "sin",
        }
    }
}

/// The analysis result for one corpus file. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// File name (basename).
    #[serde(rename = "archivo")]
    pub file_name: String,
    /// Full path to the file.
    #[serde(rename = "ruta")]
    pub path: String,
    /// Number of whitespace-delimited tokens in the file content.
    #[serde(rename = "palabras")]
    pub word_count: usize,
    /// Whether the keyword occurs at least once.
    #[serde(rename = "tiene_palabra_clave")]
    pub has_keyword: bool,
    /// Total number of whole-word occurrences (not capped).
    #[serde(rename = "total_menciones")]
    pub mention_count: usize,
    /// Up to [`crate::constants::MAX_CONTEXTS_PER_FILE`] stored occurrences,
    /// in source order.
    #[serde(rename = "contextos")]
    pub contexts: Vec<Occurrence>,
}

impl FileResult {
    /// The row category for dashboard filtering.
    pub fn presence(&self) -> Presence {
        if self.has_keyword {
            Presence::WithKeyword
        } else {
            Presence::WithoutKeyword
        }
    }
}

/// Corpus-wide derived statistics, recomputed once from the file results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Total keyword occurrences across the corpus.
    #[serde(rename = "total_menciones")]
    pub total_mentions: usize,
    /// Number of files with at least one occurrence.
    #[serde(rename = "archivos_con_palabra")]
    pub files_with_keyword: usize,
    /// Number of files with no occurrences.
    #[serde(rename = "archivos_sin_palabra")]
    pub files_without_keyword: usize,
    /// Percentage of files with the keyword, rounded to 2 decimals.
    #[serde(rename = "porcentaje_con_palabra")]
    pub percent_with_keyword: f64,
    /// Percentage of files without the keyword, rounded to 2 decimals.
    #[serde(rename = "porcentaje_sin_palabra")]
    pub percent_without_keyword: f64,
    /// Occurrences per million words, rounded to 2 decimals. Zero when the
    /// corpus has no words.
    #[serde(rename = "frecuencia_por_millon_palabras")]
    pub frequency_per_million: f64,
}

/// Run metadata recorded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// The scanned root directory.
    #[serde(rename = "directorio")]
    pub directory: String,
    /// Number of files included in the aggregation (unreadable files excluded).
    #[serde(rename = "total_archivos")]
    pub total_files: usize,
    /// Total words across the included files.
    #[serde(rename = "total_palabras")]
    pub total_words: usize,
    /// ISO-8601 timestamp of the analysis.
    #[serde(rename = "fecha_analisis")]
    pub analyzed_at: String,
    /// The exact keyword that was searched.
    #[serde(rename = "palabra_buscada")]
    pub keyword: String,
}

/// The single artifact produced by a run: serialized to JSON and rendered to
/// the HTML dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "metadata")]
    pub metadata: ReportMetadata,
    #[serde(rename = "resumen_general")]
    pub summary: CorpusSummary,
    #[serde(rename = "archivos")]
    pub files: Vec<FileResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file_result(mentions: usize) -> FileResult {
        FileResult {
            file_name: "a.txt".to_string(),
            path: "/corpus/a.txt".to_string(),
            word_count: 10,
            has_keyword: mentions > 0,
            mention_count: mentions,
            contexts: Vec::new(),
        }
    }

    #[test]
    fn test_presence_tag_matches_mentions() {
        assert_eq!(sample_file_result(2).presence(), Presence::WithKeyword);
        assert_eq!(sample_file_result(0).presence(), Presence::WithoutKeyword);
        assert_eq!(Presence::WithKeyword.filter_tag(), "con");
        assert_eq!(Presence::WithoutKeyword.filter_tag(), "sin");
    }

    #[test]
    fn test_serialized_field_names_follow_the_contract() {
        let result = sample_file_result(3);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["archivo"], "a.txt");
        assert_eq!(json["ruta"], "/corpus/a.txt");
        assert_eq!(json["palabras"], 10);
        assert_eq!(json["tiene_palabra_clave"], true);
        assert_eq!(json["total_menciones"], 3);
        assert!(json["contextos"].is_array());
    }

    #[test]
    fn test_occurrence_field_names() {
        let occ = Occurrence {
            text: "contexto".to_string(),
            position: 42,
            word: "Ejemplo".to_string(),
        };
        let json = serde_json::to_value(&occ).unwrap();
        assert_eq!(json["texto"], "contexto");
        assert_eq!(json["posicion"], 42);
        assert_eq!(json["palabra"], "Ejemplo");
    }
}
