//! Defines the core `Config` struct and its builder.
//!
//! This module consolidates the settings parsed and validated from the CLI,
//! making them available to the rest of the application in a structured and
//! type-safe manner.

use crate::cli::Cli;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Validated configuration for a single analysis run. Immutable once built.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the corpus to scan.
    pub root: PathBuf,
    /// The exact keyword to search for (case-sensitive, whole-word).
    pub keyword: String,
}

/// Builds and validates a [`Config`] from the CLI or programmatically.
///
/// # Examples
///
/// ```
/// use buscador::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .root(".")
///     .keyword("Ejemplo")
///     .build()
///     .unwrap();
/// assert_eq!(config.keyword, "Ejemplo");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    root: PathBuf,
    keyword: String,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            root: PathBuf::from(cli.directory),
            keyword: cli.keyword,
        }
    }

    /// Sets the corpus root directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the keyword to search for.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Validates the settings and produces the final `Config`.
    ///
    /// # Errors
    /// - [`Error::DirectoryNotFound`] if the root does not exist.
    /// - [`Error::NotADirectory`] if the root exists but is not a directory.
    /// - [`Error::EmptyKeyword`] if the keyword is empty or whitespace-only.
    pub fn build(self) -> Result<Config> {
        if self.keyword.trim().is_empty() {
            return Err(Error::EmptyKeyword);
        }
        if !self.root.exists() {
            return Err(Error::DirectoryNotFound(self.root));
        }
        if !self.root.is_dir() {
            return Err(Error::NotADirectory(self.root));
        }
        Ok(Config {
            root: self.root,
            keyword: self.keyword,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_valid_config() {
        let temp = tempdir().unwrap();
        let config = ConfigBuilder::new()
            .root(temp.path())
            .keyword("Ejemplo")
            .build()
            .unwrap();
        assert_eq!(config.root, temp.path());
        assert_eq!(config.keyword, "Ejemplo");
    }

    #[test]
    fn test_missing_directory_is_rejected() {
        let err = ConfigBuilder::new()
            .root("/no/existe/en/absoluto")
            .keyword("Ejemplo")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound(_)));
    }

    #[test]
    fn test_file_as_root_is_rejected() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("archivo.txt");
        fs::write(&file_path, "contenido").unwrap();

        let err = ConfigBuilder::new()
            .root(&file_path)
            .keyword("Ejemplo")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn test_empty_keyword_is_rejected() {
        let temp = tempdir().unwrap();
        let err = ConfigBuilder::new()
            .root(temp.path())
            .keyword("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::EmptyKeyword));
    }
}
