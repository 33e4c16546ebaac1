// src/cli.rs

use clap::Parser;

/// Keyword presence and frequency analyzer for plain-text corpora.
///
/// buscador recursively scans a directory of .txt files for exact,
/// case-sensitive whole-word occurrences of a single keyword, and writes a
/// JSON report plus a self-contained interactive HTML dashboard to the
/// current working directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the directory containing the .txt corpus files.
    #[arg(value_name = "DIRECTORIO")]
    pub directory: String,

    /// Exact keyword to search for (case-sensitive, matched as a whole word).
    #[arg(short = 'k', long = "keyword", value_name = "PALABRA")]
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_directory_and_keyword() {
        let cli = Cli::parse_from(["buscador", "/corpus", "-k", "Ejemplo"]);
        assert_eq!(cli.directory, "/corpus");
        assert_eq!(cli.keyword, "Ejemplo");
    }

    #[test]
    fn test_long_keyword_flag() {
        let cli = Cli::parse_from(["buscador", ".", "--keyword", "música"]);
        assert_eq!(cli.keyword, "música");
    }

    #[test]
    fn test_missing_keyword_is_an_error() {
        assert!(Cli::try_parse_from(["buscador", "/corpus"]).is_err());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        assert!(Cli::try_parse_from(["buscador", "-k", "Ejemplo"]).is_err());
    }
}
