//! Ranked item aggregates over the unified sales table.
//!
//! All four report shapes reduce to the same operation: optionally filter by
//! category, group by item name, sum one numeric measure with nulls excluded,
//! sort, truncate to N.

use std::cmp::Ordering;
use std::collections::HashMap;

use metrics_core::error::Result;
use metrics_core::models::{ItemTotal, SalesTable, ITEM_NAME, NET_SALES, QUANTITY, SALES_CATEGORY};

/// Rows per ranked report unless a caller asks otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Top `n` items by total quantity sold, best sellers first.
pub fn top_items_by_quantity(table: &SalesTable, n: usize) -> Result<Vec<ItemTotal>> {
    ranked_totals(table, QUANTITY, Order::Descending, n, None)
}

/// Top `n` items by total net sales revenue, highest first.
pub fn top_items_by_revenue(table: &SalesTable, n: usize) -> Result<Vec<ItemTotal>> {
    ranked_totals(table, NET_SALES, Order::Descending, n, None)
}

/// Bottom `n` items by total quantity sold (poor performers).
pub fn bottom_items_by_quantity(table: &SalesTable, n: usize) -> Result<Vec<ItemTotal>> {
    ranked_totals(table, QUANTITY, Order::Ascending, n, None)
}

/// Bottom `n` items by quantity within one sales category.
///
/// The category filter is an exact text match applied before grouping.
pub fn bottom_items_by_category(
    table: &SalesTable,
    category: &str,
    n: usize,
) -> Result<Vec<ItemTotal>> {
    ranked_totals(table, QUANTITY, Order::Ascending, n, Some(category))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

enum Order {
    Ascending,
    Descending,
}

/// Shared grouping/summing/ranking driver behind the four report shapes.
///
/// Rows whose item name is null are excluded from grouping; null measure
/// cells contribute nothing to their item's sum. Equal sums order by item
/// name ascending so report order is deterministic regardless of input
/// row order.
fn ranked_totals(
    table: &SalesTable,
    measure: &str,
    order: Order,
    n: usize,
    category: Option<&str>,
) -> Result<Vec<ItemTotal>> {
    let item_idx = table.require_column(ITEM_NAME)?;
    let measure_idx = table.require_column(measure)?;
    let category_idx = match category {
        Some(_) => Some(table.require_column(SALES_CATEGORY)?),
        None => None,
    };

    // Group in first-encounter order: a slot per distinct item name.
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<ItemTotal> = Vec::new();

    for row in table.rows() {
        if let (Some(idx), Some(wanted)) = (category_idx, category) {
            if row[idx].as_text() != Some(wanted) {
                continue;
            }
        }

        let Some(item) = row[item_idx].as_text() else {
            continue;
        };

        let slot = *slots.entry(item.to_string()).or_insert_with(|| {
            totals.push(ItemTotal {
                item: item.to_string(),
                total: 0.0,
            });
            totals.len() - 1
        });

        if let Some(value) = row[measure_idx].as_number() {
            totals[slot].total += value;
        }
    }

    totals.sort_by(|a, b| {
        let by_total = a
            .total
            .partial_cmp(&b.total)
            .unwrap_or(Ordering::Equal);
        let by_total = match order {
            Order::Ascending => by_total,
            Order::Descending => by_total.reverse(),
        };
        by_total.then_with(|| a.item.cmp(&b.item))
    });
    totals.truncate(n);
    Ok(totals)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
