//! Derives the corpus-wide summary from per-file results.

use crate::core_types::{CorpusSummary, FileResult};

/// Rounds to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the corpus summary from the accumulated file results.
///
/// Percentages and the per-million frequency are 0 when their respective
/// denominators (file count, word count) are zero.
pub fn summarize(files: &[FileResult]) -> CorpusSummary {
    let total_files = files.len();
    let total_words: usize = files.iter().map(|f| f.word_count).sum();
    let total_mentions: usize = files.iter().map(|f| f.mention_count).sum();
    let files_with_keyword = files.iter().filter(|f| f.has_keyword).count();
    let files_without_keyword = total_files - files_with_keyword;

    let (percent_with, percent_without) = if total_files > 0 {
        (
            round2(files_with_keyword as f64 / total_files as f64 * 100.0),
            round2(files_without_keyword as f64 / total_files as f64 * 100.0),
        )
    } else {
        (0.0, 0.0)
    };

    let frequency_per_million = if total_words > 0 {
        round2(total_mentions as f64 / total_words as f64 * 1_000_000.0)
    } else {
        0.0
    };

    CorpusSummary {
        total_mentions,
        files_with_keyword,
        files_without_keyword,
        percent_with_keyword: percent_with,
        percent_without_keyword: percent_without,
        frequency_per_million,
    }
}
