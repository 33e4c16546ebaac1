// src/progress.rs

//! Defines a trait for reporting the progress of a corpus run.
//!
//! The analysis pipeline reports line-oriented status events through this
//! trait; the binary wires in [`ConsoleProgress`], which prints the
//! informational messages to standard output, while library callers and
//! tests can use [`NoOpProgress`].

use std::path::Path;

/// A sink for run status events, abstracting over the console output.
///
/// # Examples
///
/// ```
/// use buscador::progress::ProgressReporter;
/// use std::path::Path;
/// use std::sync::Mutex;
///
/// // A mock reporter that stores the last processed file name.
/// struct MockProgress {
///     last_file: Mutex<String>,
/// }
/// impl ProgressReporter for MockProgress {
///     fn scanning_directory(&self, _dir: &Path) {}
///     fn files_found(&self, _count: usize) {}
///     fn processing_file(&self, _index: usize, _total: usize, name: &str) {
///         *self.last_file.lock().unwrap() = name.to_string();
///     }
///     fn file_failed(&self, _path: &Path, _cause: &str) {}
/// }
///
/// let reporter = MockProgress { last_file: Mutex::new(String::new()) };
/// reporter.processing_file(1, 3, "a.txt");
/// assert_eq!(*reporter.last_file.lock().unwrap(), "a.txt");
/// ```
pub trait ProgressReporter: Send + Sync {
    /// The root directory scan is starting.
    fn scanning_directory(&self, dir: &Path);
    /// The walk finished and found `count` qualifying files.
    fn files_found(&self, count: usize);
    /// File `index` of `total` is about to be analyzed.
    fn processing_file(&self, index: usize, total: usize, name: &str);
    /// A file could not be read and is excluded from the aggregates.
    fn file_failed(&self, path: &Path, cause: &str);
}

/// A `ProgressReporter` that does nothing. Used by library callers and tests.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn scanning_directory(&self, _dir: &Path) {}
    fn files_found(&self, _count: usize) {}
    fn processing_file(&self, _index: usize, _total: usize, _name: &str) {}
    fn file_failed(&self, _path: &Path, _cause: &str) {}
}

/// Prints the run's informational status lines to standard output.
///
/// The messages are purely informational and not machine-parseable; they
/// mirror the wording users of the original analysis tool expect.
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn scanning_directory(&self, dir: &Path) {
        println!("Analizando directorio: {}", dir.display());
    }

    fn files_found(&self, count: usize) {
        println!("Encontrados {} archivos TXT", count);
    }

    fn processing_file(&self, index: usize, total: usize, name: &str) {
        println!("Procesando {}/{}: {}", index, total, name);
    }

    fn file_failed(&self, path: &Path, cause: &str) {
        println!("Error analizando {}: {}", path.display(), cause);
    }
}
