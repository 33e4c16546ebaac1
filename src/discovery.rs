//! Discovers corpus files under the scanned root directory.
//!
//! The walk is recursive, sequential, and deterministic: entries are visited
//! in lexicographic file-name order so repeated runs over the same corpus
//! enumerate files identically. Only regular files with the exact `txt`
//! extension qualify; everything else is ignored.

use crate::constants::TXT_EXTENSION;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively enumerates all `.txt` files under `root`, in a stable
/// deterministic order.
///
/// Directory entries that cannot be read (permission errors, dangling links)
/// are logged and skipped; they never abort the walk.
pub fn find_txt_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under '{}': {}", root.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() && has_txt_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    debug!(
        "Discovery complete under '{}': {} .txt files",
        root.display(),
        files.len()
    );
    files
}

/// Checks for the exact (case-sensitive) `txt` extension, matching the
/// original corpus convention.
fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == TXT_EXTENSION)
        .unwrap_or(false)
}
