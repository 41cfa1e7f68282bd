//! Assembly of the unified sales table.
//!
//! Loads every discovered export, normalizes it, stamps each row with its
//! source week label and concatenates everything into one table for the
//! aggregation and persistence stages.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use metrics_core::error::{MetricsError, Result};
use metrics_core::models::{Cell, SalesTable, ITEM_NAME, WEEK};
use tracing::{debug, info, warn};

use crate::discovery::find_menu_csvs;
use crate::normalizer::normalize_menu_table;

/// Load all menu-breakdown CSVs under `base_dir` into one unified table.
///
/// Files are processed in discovery order; within a file, row order is kept.
/// Every row gains a `Week` column holding the source file's stem. Columns
/// are unioned across files, with [`Cell::Null`] where a file lacks one.
///
/// Zero matching files is not an error — the result is an empty table and
/// the caller decides whether to abort.
pub fn load_all_weeks(base_dir: &Path) -> Result<SalesTable> {
    let files = find_menu_csvs(base_dir)?;
    if files.is_empty() {
        warn!("No menu-breakdown CSVs found in {}", base_dir.display());
        return Ok(SalesTable::default());
    }

    let mut unified = SalesTable::default();
    for path in &files {
        let mut table = read_menu_csv(path)?;
        normalize_menu_table(&mut table);

        let week = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.add_column(WEEK, Cell::text(week));

        debug!("File {}: {} rows", path.display(), table.len());
        unified.append(table);
    }

    info!(
        "Loaded {} rows from {} files",
        unified.len(),
        files.len()
    );
    Ok(unified)
}

/// Remove POS subtotal/total rows before persistence.
///
/// Drops every row whose Item Name contains `"total"` in any letter case.
/// Rows with a null Item Name are kept — a missing name is not evidence of a
/// total row. The Item Name column itself is required.
pub fn drop_total_rows(table: &SalesTable) -> Result<SalesTable> {
    let item_idx = table.require_column(ITEM_NAME)?;

    let mut out = SalesTable::new(table.columns().to_vec());
    for row in table.rows() {
        let is_total = row[item_idx]
            .as_text()
            .map(|name| name.to_lowercase().contains("total"))
            .unwrap_or(false);
        if !is_total {
            out.push_row(row.clone());
        }
    }
    Ok(out)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse one CSV export into a raw all-text table. The first record is the
/// header; short data rows are padded with nulls, long ones truncated.
fn read_menu_csv(path: &Path) -> Result<SalesTable> {
    let file = File::open(path).map_err(|source| MetricsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let mut table = SalesTable::new(headers.iter().map(str::to_string).collect());

    for record in reader.records() {
        let record = record?;
        let row: Vec<Cell> = record.iter().map(Cell::text).collect();
        table.push_row(row);
    }

    Ok(table)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
