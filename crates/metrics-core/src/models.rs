//! Named-column table model for menu-breakdown sales data.
//!
//! POS exports are duck-typed: column order varies, columns may be missing,
//! and numeric cells may fail coercion. [`SalesTable`] makes that explicit —
//! columns are addressed by name and every cell is either text, a number, or
//! an explicit [`Cell::Null`] marker.

use crate::error::{MetricsError, Result};

// ── Column names ──────────────────────────────────────────────────────────────

/// Grouping key for all item-level aggregates.
pub const ITEM_NAME: &str = "Item Name";
/// Category column used by the category-scoped reports.
pub const SALES_CATEGORY: &str = "Sales Category";
/// Quantity-sold measure.
pub const QUANTITY: &str = "Quantity";
/// Revenue measure.
pub const NET_SALES: &str = "Net Sales";
/// Provenance column stamped onto every row at load time (file stem).
pub const WEEK: &str = "Week";

/// Monetary/quantity columns coerced from display strings to numbers.
pub const NUMERIC_COLUMNS: [&str; 5] = [
    "Avg Price",
    QUANTITY,
    "Gross Sales",
    "Discount Amount",
    NET_SALES,
];

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A single table cell.
///
/// `Null` marks a value that is absent or failed numeric coercion. Sums must
/// skip nulls (zero contribution) rather than treating them as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Null,
}

impl Cell {
    /// Build a text cell from anything string-like.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// The numeric value, or `None` for text and null cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// The text value, or `None` for numeric and null cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

// ── ItemTotal ─────────────────────────────────────────────────────────────────

/// One row of an aggregate report: an item name and its summed measure.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTotal {
    pub item: String,
    pub total: f64,
}

// ── SalesTable ────────────────────────────────────────────────────────────────

/// An ordered, named-column table of sales records.
///
/// Invariant: every row is exactly `columns.len()` cells wide. Mutating
/// methods preserve this by padding short rows with [`Cell::Null`] and
/// truncating long ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl SalesTable {
    /// Create an empty table with the given header.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Mutable view of the column names. The count cannot change through
    /// this, so the row-width invariant holds.
    pub fn columns_mut(&mut self) -> &mut [String] {
        &mut self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<Cell>] {
        &mut self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like [`column_index`](Self::column_index) but a missing column is a
    /// schema error naming the column.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| MetricsError::MissingColumn(name.to_string()))
    }

    /// Append one row, padded or truncated to the current column count.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Null);
        self.rows.push(row);
    }

    /// Add a new column filled with `fill` for every existing row.
    pub fn add_column(&mut self, name: impl Into<String>, fill: Cell) {
        self.columns.push(name.into());
        for row in &mut self.rows {
            row.push(fill.clone());
        }
    }

    /// Concatenate `other` onto this table, taking the union of columns.
    ///
    /// Row order is preserved (self's rows first, then other's). Rows missing
    /// a column get [`Cell::Null`] there. Appending onto a fresh default
    /// table adopts the other table's header as-is.
    pub fn append(&mut self, other: SalesTable) {
        for name in &other.columns {
            if self.column_index(name).is_none() {
                self.add_column(name.clone(), Cell::Null);
            }
        }

        // Map other's column positions into self's header once.
        let mapping: Vec<usize> = other
            .columns
            .iter()
            .map(|name| self.column_index(name).expect("column added above"))
            .collect();

        for row in other.rows {
            let mut new_row = vec![Cell::Null; self.columns.len()];
            for (cell, &dest) in row.into_iter().zip(&mapping) {
                new_row[dest] = cell;
            }
            self.rows.push(new_row);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
