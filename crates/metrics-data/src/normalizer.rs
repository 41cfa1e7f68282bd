//! Numeric normalization of menu-breakdown tables.
//!
//! Toast exports monetary columns as display strings (`"$1,234.50"`). This
//! module strips the display formatting and coerces the configured numeric
//! columns to numbers, mapping anything unparsable to [`Cell::Null`].

use metrics_core::models::{Cell, SalesTable, NUMERIC_COLUMNS};

/// Normalize a freshly parsed menu-breakdown table in place.
///
/// Column names are trimmed of surrounding whitespace. Every cell in each
/// present [`NUMERIC_COLUMNS`] member is stripped of `,` and `$` and parsed
/// as a number; failures become [`Cell::Null`], never an error. Columns the
/// export does not carry are silently skipped. Row count and column set are
/// preserved.
pub fn normalize_menu_table(table: &mut SalesTable) {
    for name in table.columns_mut() {
        let trimmed = name.trim();
        if trimmed.len() != name.len() {
            *name = trimmed.to_string();
        }
    }

    for column in NUMERIC_COLUMNS {
        let Some(idx) = table.column_index(column) else {
            continue;
        };
        for row in table.rows_mut() {
            row[idx] = coerce_numeric(&row[idx]);
        }
    }
}

/// Coerce one cell to a number, stripping thousands separators and currency
/// symbols first. Unparsable text becomes null.
fn coerce_numeric(cell: &Cell) -> Cell {
    let text = match cell {
        Cell::Number(v) => return Cell::Number(*v),
        Cell::Null => return Cell::Null,
        Cell::Text(s) => s,
    };

    let stripped: String = text.chars().filter(|c| *c != ',' && *c != '$').collect();
    match stripped.trim().parse::<f64>() {
        Ok(value) => Cell::Number(value),
        Err(_) => Cell::Null,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
