//! The SQLite-backed sales store.

use std::path::{Path, PathBuf};

use metrics_core::error::Result;
use metrics_core::models::{Cell, SalesTable};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

/// Name of the single persisted table.
pub const SALES_TABLE: &str = "sales";

/// Rows returned by an ad-hoc query: result column names plus cell rows.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Handle to the SQLite store at a configured file path.
///
/// The path is an explicit constructor argument; nothing reads global state.
/// Connections are opened per operation and dropped on every exit path.
#[derive(Debug, Clone)]
pub struct SalesStore {
    db_path: PathBuf,
}

impl SalesStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Replace the entire contents of the `sales` table with `table`.
    ///
    /// The schema is inferred from the table's columns at write time: REAL
    /// for columns whose non-null cells are all numeric, TEXT otherwise.
    /// Drop, create and insert all run inside one transaction, so a failed
    /// write leaves the previous contents intact. A missing containing
    /// directory propagates as a store error.
    pub fn replace_sales(&self, table: &SalesTable) -> Result<()> {
        let mut conn = Connection::open(&self.db_path)?;
        let tx = conn.transaction()?;

        tx.execute(
            &format!("DROP TABLE IF EXISTS {}", quote_ident(SALES_TABLE)),
            [],
        )?;
        tx.execute(&create_table_sql(table), [])?;

        {
            let mut stmt = tx.prepare(&insert_sql(table))?;
            for row in table.rows() {
                stmt.execute(rusqlite::params_from_iter(row.iter().map(cell_to_value)))?;
            }
        }

        tx.commit()?;
        info!(
            "Replaced {} with {} rows at {}",
            SALES_TABLE,
            table.len(),
            self.db_path.display()
        );
        Ok(())
    }

    /// Execute an arbitrary SQL query against the store, read-only.
    ///
    /// The query string is trusted as-is: this tool is single-operator and
    /// local, so no sanitization is applied. The read-only open flag keeps
    /// an ad-hoc query from mutating the store by accident.
    pub fn query(&self, sql: &str) -> Result<QueryResult> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
        let width = columns.len();

        let mut out_rows: Vec<Vec<Cell>> = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut out = Vec::with_capacity(width);
            for i in 0..width {
                out.push(match row.get_ref(i)? {
                    ValueRef::Null => Cell::Null,
                    ValueRef::Integer(v) => Cell::Number(v as f64),
                    ValueRef::Real(v) => Cell::Number(v),
                    ValueRef::Text(t) => Cell::Text(String::from_utf8_lossy(t).into_owned()),
                    ValueRef::Blob(_) => Cell::Null,
                });
            }
            out_rows.push(out);
        }

        debug!("Query returned {} rows", out_rows.len());
        Ok(QueryResult {
            columns,
            rows: out_rows,
        })
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Build the CREATE TABLE statement for the inferred schema.
fn create_table_sql(table: &SalesTable) -> String {
    let defs: Vec<String> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, name)| format!("{} {}", quote_ident(name), column_affinity(table, idx)))
        .collect();
    format!(
        "CREATE TABLE {} ({})",
        quote_ident(SALES_TABLE),
        defs.join(", ")
    )
}

/// Build the parameterized INSERT statement matching the table's columns.
fn insert_sql(table: &SalesTable) -> String {
    let names: Vec<String> = table.columns().iter().map(|n| quote_ident(n)).collect();
    let placeholders: Vec<&str> = table.columns().iter().map(|_| "?").collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(SALES_TABLE),
        names.join(", "),
        placeholders.join(", ")
    )
}

/// REAL when every non-null cell in the column is numeric and at least one
/// is present, TEXT otherwise.
fn column_affinity(table: &SalesTable, idx: usize) -> &'static str {
    let mut saw_number = false;
    for row in table.rows() {
        match &row[idx] {
            Cell::Number(_) => saw_number = true,
            Cell::Null => {}
            Cell::Text(_) => return "TEXT",
        }
    }
    if saw_number {
        "REAL"
    } else {
        "TEXT"
    }
}

fn cell_to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Null => Value::Null,
        Cell::Number(v) => Value::Real(*v),
        Cell::Text(s) => Value::Text(s.clone()),
    }
}

/// Double-quote an identifier, escaping embedded quotes. Export column names
/// contain spaces ("Item Name"), so every identifier is quoted.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_core::models::{ITEM_NAME, NET_SALES, QUANTITY, SALES_CATEGORY, WEEK};
    use tempfile::TempDir;

    fn sample_table() -> SalesTable {
        let mut table = SalesTable::new(vec![
            ITEM_NAME.into(),
            SALES_CATEGORY.into(),
            QUANTITY.into(),
            NET_SALES.into(),
            WEEK.into(),
        ]);
        table.push_row(vec![
            Cell::text("Burger"),
            Cell::text("Food"),
            Cell::Number(10.0),
            Cell::Number(50.0),
            Cell::text("week1-menu-breakdown"),
        ]);
        table.push_row(vec![
            Cell::text("Soda"),
            Cell::text("Drinks"),
            Cell::Number(20.0),
            Cell::Null,
            Cell::text("week1-menu-breakdown"),
        ]);
        table
    }

    fn store_in(dir: &TempDir) -> SalesStore {
        SalesStore::new(dir.path().join("toastmetrics.db"))
    }

    // ── replace_sales ─────────────────────────────────────────────────────────

    #[test]
    fn test_replace_then_query_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.replace_sales(&sample_table()).unwrap();

        let result = store
            .query("SELECT \"Item Name\", \"Quantity\" FROM sales ORDER BY \"Item Name\"")
            .unwrap();
        assert_eq!(result.columns, vec!["Item Name", "Quantity"]);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0][0], Cell::text("Burger"));
        assert_eq!(result.rows[0][1], Cell::Number(10.0));
    }

    #[test]
    fn test_replace_supersedes_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.replace_sales(&sample_table()).unwrap();

        let mut smaller = SalesTable::new(vec![ITEM_NAME.into(), QUANTITY.into()]);
        smaller.push_row(vec![Cell::text("Soup"), Cell::Number(3.0)]);
        store.replace_sales(&smaller).unwrap();

        let result = store.query("SELECT \"Item Name\" FROM sales").unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0][0], Cell::text("Soup"));
    }

    #[test]
    fn test_null_cells_roundtrip_as_null() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.replace_sales(&sample_table()).unwrap();

        let result = store
            .query("SELECT \"Net Sales\" FROM sales WHERE \"Item Name\" = 'Soda'")
            .unwrap();
        assert_eq!(result.rows[0][0], Cell::Null);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let store = SalesStore::new("/tmp/does-not-exist-toastmetrics-xyz/toastmetrics.db");
        assert!(store.replace_sales(&sample_table()).is_err());
    }

    #[test]
    fn test_grouped_sum_skips_nulls() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.replace_sales(&sample_table()).unwrap();

        // SQLite SUM ignores NULLs, matching the in-memory aggregator rule.
        let result = store
            .query("SELECT SUM(\"Net Sales\") FROM sales")
            .unwrap();
        assert_eq!(result.rows[0][0], Cell::Number(50.0));
    }

    // ── query ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_query_is_read_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.replace_sales(&sample_table()).unwrap();

        assert!(store.query("DELETE FROM sales").is_err());

        let result = store.query("SELECT COUNT(*) FROM sales").unwrap();
        assert_eq!(result.rows[0][0], Cell::Number(2.0));
    }

    #[test]
    fn test_query_missing_store_is_an_error() {
        let store = SalesStore::new("/tmp/does-not-exist-toastmetrics-xyz/toastmetrics.db");
        assert!(store.query("SELECT 1").is_err());
    }

    // ── schema inference ──────────────────────────────────────────────────────

    #[test]
    fn test_numeric_columns_get_real_affinity() {
        let table = sample_table();
        let qty = table.column_index(QUANTITY).unwrap();
        let item = table.column_index(ITEM_NAME).unwrap();
        let net = table.column_index(NET_SALES).unwrap();
        assert_eq!(column_affinity(&table, qty), "REAL");
        assert_eq!(column_affinity(&table, item), "TEXT");
        // Numbers plus nulls still count as numeric.
        assert_eq!(column_affinity(&table, net), "REAL");
    }

    #[test]
    fn test_quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("Item Name"), "\"Item Name\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_replace_empty_table_creates_empty_sales() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let table = SalesTable::new(vec![ITEM_NAME.into(), QUANTITY.into()]);
        store.replace_sales(&table).unwrap();

        let result = store.query("SELECT COUNT(*) FROM sales").unwrap();
        assert_eq!(result.rows[0][0], Cell::Number(0.0));
    }
}
