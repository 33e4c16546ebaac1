//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can occur during a run, offering more context than generic I/O or `anyhow`
//! errors, plus a crate-wide `Result` alias.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `buscador`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Usage / configuration errors ---
    /// The directory given on the command line does not exist.
    #[error("El directorio no existe: {0}")]
    DirectoryNotFound(PathBuf),

    /// The path given on the command line exists but is not a directory.
    #[error("La ruta no es un directorio: {0}")]
    NotADirectory(PathBuf),

    /// The keyword is empty or whitespace-only.
    #[error("La palabra clave no puede estar vacía")]
    EmptyKeyword,

    // --- Corpus errors ---
    /// No `.txt` files were found under the scanned root directory.
    #[error("No se encontraron archivos TXT en el directorio: {0}")]
    NoTxtFiles(PathBuf),

    // --- Serialization ---
    /// Failure while serializing the report to JSON.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Helper function to create an [`Error::Io`] with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
