//! Per-file analysis: read, decode, count words, and match the keyword.
//!
//! Each file is opened, read fully, and closed before the next one is
//! touched. Decoding is best-effort: invalid UTF-8 sequences are replaced
//! rather than aborting the file. A file that cannot be read at all yields an
//! error carrying its path; the caller logs it and excludes the file from all
//! aggregates.

use crate::constants::MAX_CONTEXTS_PER_FILE;
use crate::core_types::FileResult;
use crate::errors::{io_error_with_path, Result};
use crate::matcher::KeywordMatcher;
use log::debug;
use std::fs;
use std::path::Path;

/// Analyzes a single corpus file with the given matcher.
///
/// Word count is the number of whitespace-delimited tokens in the decoded
/// content (simple split, not linguistic tokenization). At most
/// [`MAX_CONTEXTS_PER_FILE`] occurrences are stored on the result, while the
/// mention count covers all of them.
///
/// # Errors
/// Returns an I/O error with path context if the file cannot be read.
pub fn analyze_file(path: &Path, matcher: &KeywordMatcher) -> Result<FileResult> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    let content = String::from_utf8_lossy(&bytes);

    let word_count = content.split_whitespace().count();
    let mut occurrences = matcher.find(&content);
    let mention_count = occurrences.len();
    occurrences.truncate(MAX_CONTEXTS_PER_FILE);

    debug!(
        "Analyzed '{}': {} words, {} mentions",
        path.display(),
        word_count,
        mention_count
    );

    Ok(FileResult {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        path: path.display().to_string(),
        word_count,
        has_keyword: mention_count > 0,
        mention_count,
        contexts: occurrences,
    })
}
