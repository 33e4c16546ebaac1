//! Whole-word keyword matching with bounded context extraction.
//!
//! A [`KeywordMatcher`] compiles the configured keyword into a literal
//! word-bounded pattern once, then scans texts left-to-right for
//! non-overlapping matches. Word boundaries follow the `regex` crate's
//! Unicode-aware `\b` (word character = Unicode alphanumeric or underscore),
//! so accented letters count as word characters and a keyword never matches
//! inside a larger token.

use crate::constants::CONTEXT_WINDOW_CHARS;
use crate::core_types::Occurrence;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Builds the word-bounded pattern string for a literal keyword.
///
/// The keyword is passed through [`regex::escape`], so characters meaningful
/// to the pattern language are matched literally.
pub(crate) fn word_pattern(literal: &str) -> String {
    format!(r"\b{}\b", regex::escape(literal))
}

/// Finds exact, case-sensitive whole-word occurrences of a single keyword.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    pattern: Regex,
}

impl KeywordMatcher {
    /// Compiles the matcher for the given keyword.
    pub fn new(keyword: &str) -> Self {
        // The keyword is escaped, so the pattern is always a valid literal.
        let pattern = Regex::new(&word_pattern(keyword))
            .expect("escaped keyword must compile to a valid pattern");
        Self {
            keyword: keyword.to_string(),
            pattern,
        }
    }

    /// The keyword this matcher searches for.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns all whole-word occurrences of the keyword in `text`, in source
    /// order, each with its normalized surrounding context.
    ///
    /// Returns an empty vector when there are no matches; never fails.
    pub fn find(&self, text: &str) -> Vec<Occurrence> {
        self.pattern
            .find_iter(text)
            .map(|m| Occurrence {
                text: extract_context(text, m.start(), m.end()),
                position: m.start(),
                word: m.as_str().to_string(),
            })
            .collect()
    }
}

/// Extracts up to [`CONTEXT_WINDOW_CHARS`] characters of context on each side
/// of the match, clamped to the text boundaries, then trims and collapses
/// whitespace runs (including newlines) to single spaces.
fn extract_context(text: &str, match_start: usize, match_end: usize) -> String {
    let window_start = text[..match_start]
        .char_indices()
        .rev()
        .nth(CONTEXT_WINDOW_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let window_end = text[match_end..]
        .char_indices()
        .nth(CONTEXT_WINDOW_CHARS)
        .map(|(i, _)| match_end + i)
        .unwrap_or(text.len());

    WHITESPACE_RUN
        .replace_all(text[window_start..window_end].trim(), " ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match_only() {
        let matcher = KeywordMatcher::new("Ejemplo");
        let occurrences = matcher.find("Un Ejemplo claro. Varios Ejemplos no cuentan.");
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].word, "Ejemplo");
        assert_eq!(occurrences[0].position, 3);
    }

    #[test]
    fn test_substring_inside_larger_token_does_not_match() {
        let matcher = KeywordMatcher::new("cat");
        assert!(matcher.find("category catalog concatenate").is_empty());
        assert_eq!(matcher.find("the cat sat").len(), 1);
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = KeywordMatcher::new("Ejemplo");
        assert!(matcher.find("un ejemplo en minúsculas").is_empty());
        assert_eq!(matcher.find("Ejemplo con mayúscula").len(), 1);
    }

    #[test]
    fn test_keyword_metacharacters_are_literal() {
        let matcher = KeywordMatcher::new("a.b");
        // '.' must not act as a wildcard.
        assert!(matcher.find("axb").is_empty());
        assert_eq!(matcher.find("ver a.b aquí").len(), 1);
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        let matcher = KeywordMatcher::new("la");
        let occurrences = matcher.find("la la la");
        assert_eq!(occurrences.len(), 3);
        assert_eq!(
            occurrences.iter().map(|o| o.position).collect::<Vec<_>>(),
            vec![0, 3, 6]
        );
    }

    #[test]
    fn test_accented_neighbors_block_the_boundary() {
        // 'é' is a word character under Unicode \b, so no boundary exists
        // between it and the keyword.
        let matcher = KeywordMatcher::new("jemplo");
        assert!(matcher.find("Éjemplo").is_empty());
    }

    #[test]
    fn test_context_clamped_to_text_boundaries() {
        let matcher = KeywordMatcher::new("hola");
        let occurrences = matcher.find("hola");
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].text, "hola");
    }

    #[test]
    fn test_context_window_is_bounded() {
        let padding = "palabra ".repeat(50); // far more than 100 chars each side
        let text = format!("{}Ejemplo {}", padding, padding);
        let matcher = KeywordMatcher::new("Ejemplo");
        let occurrences = matcher.find(&text);
        assert_eq!(occurrences.len(), 1);
        let context = &occurrences[0].text;
        // 100 chars before + match + up to 100 after, post-normalization.
        assert!(context.chars().count() <= 100 + "Ejemplo".len() + 100);
        assert!(context.contains("Ejemplo"));
    }

    #[test]
    fn test_context_window_respects_char_boundaries() {
        // Multi-byte characters near the window edge must not cause a
        // byte-offset slice panic.
        let padding = "é".repeat(150);
        let text = format!("{} Ejemplo {}", padding, padding);
        let matcher = KeywordMatcher::new("Ejemplo");
        let occurrences = matcher.find(&text);
        assert_eq!(occurrences.len(), 1);
        // 99 padding chars + the space on each side fit in the window.
        assert!(occurrences[0].text.contains("Ejemplo"));
    }

    #[test]
    fn test_context_whitespace_is_normalized() {
        let matcher = KeywordMatcher::new("clave");
        let occurrences = matcher.find("  una\n\npalabra\t clave  aquí \n");
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].text, "una palabra clave aquí");
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let matcher = KeywordMatcher::new("ausente");
        assert!(matcher.find("nada que ver").is_empty());
        assert!(matcher.find("").is_empty());
    }

    #[test]
    fn test_word_pattern_escapes_literal() {
        assert_eq!(word_pattern("a.b"), r"\ba\.b\b");
    }
}
