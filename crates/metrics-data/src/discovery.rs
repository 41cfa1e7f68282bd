//! Discovery of menu-breakdown CSV exports.
//!
//! Toast names its menu-item sales exports with a `menu-breakdown` marker;
//! anything else in the data directory (item-selection exports, receipts,
//! stray spreadsheets) is ignored by name alone, never by content.

use std::path::{Path, PathBuf};

use metrics_core::error::{MetricsError, Result};
use walkdir::WalkDir;

/// Substring that identifies a menu-breakdown export (lowercased match).
pub const FILE_MARKER: &str = "menu-breakdown";
/// Expected export extension (lowercased match).
pub const CSV_EXTENSION: &str = ".csv";

/// Find all menu-breakdown CSVs directly inside `dir`, sorted by path.
///
/// The listing is non-recursive: subdirectories are not descended into.
/// A missing or unreadable directory propagates as an I/O error — callers
/// decide whether that terminates the run.
pub fn find_menu_csvs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf());
            match e.into_io_error() {
                Some(source) => MetricsError::FileRead { path, source },
                None => MetricsError::Io(std::io::Error::other("filesystem loop")),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.contains(FILE_MARKER) && name.ends_with(CSV_EXTENSION) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
