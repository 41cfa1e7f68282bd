//! Plain-text rendering of the ranked reports and ad-hoc query results.

use metrics_core::formatting::{format_currency, format_quantity};
use metrics_core::models::{Cell, ItemTotal};
use metrics_store::QueryResult;

/// How the summed measure of a ranked report is rendered.
#[derive(Debug, Clone, Copy)]
pub enum Measure {
    Quantity,
    Revenue,
}

/// Render one ranked report as aligned `item  total` lines.
pub fn render_totals(rows: &[ItemTotal], measure: Measure) -> String {
    if rows.is_empty() {
        return "(no items)".to_string();
    }

    let name_width = rows.iter().map(|r| r.item.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let value = match measure {
            Measure::Quantity => format_quantity(row.total),
            Measure::Revenue => format_currency(row.total),
        };
        out.push_str(&format!(
            "{:<width$}  {:>10}\n",
            row.item,
            value,
            width = name_width
        ));
    }
    out
}

/// Render an ad-hoc query result as a header line plus one line per row.
pub fn render_query(result: &QueryResult) -> String {
    if result.rows.is_empty() {
        return "(no rows)".to_string();
    }

    let mut out = result.columns.join(" | ");
    out.push('\n');
    for row in &result.rows {
        let rendered: Vec<String> = row.iter().map(render_cell).collect();
        out.push_str(&rendered.join(" | "));
        out.push('\n');
    }
    out
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Number(v) => format_quantity(*v),
        Cell::Null => "NULL".to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_totals_quantity() {
        let rows = vec![
            ItemTotal {
                item: "Burger".into(),
                total: 15.0,
            },
            ItemTotal {
                item: "Fries".into(),
                total: 8.0,
            },
        ];
        let text = render_totals(&rows, Measure::Quantity);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Burger"));
        assert!(lines[0].ends_with("15"));
    }

    #[test]
    fn test_render_totals_revenue_uses_currency() {
        let rows = vec![ItemTotal {
            item: "Burger".into(),
            total: 75.0,
        }];
        let text = render_totals(&rows, Measure::Revenue);
        assert!(text.contains("$75.00"));
    }

    #[test]
    fn test_render_totals_empty() {
        assert_eq!(render_totals(&[], Measure::Quantity), "(no items)");
    }

    #[test]
    fn test_render_query() {
        let result = QueryResult {
            columns: vec!["Item Name".into(), "Total_Revenue".into()],
            rows: vec![vec![Cell::text("Burger"), Cell::Number(75.0)]],
        };
        let text = render_query(&result);
        assert!(text.starts_with("Item Name | Total_Revenue"));
        assert!(text.contains("Burger | 75"));
    }

    #[test]
    fn test_render_query_null_cell() {
        let result = QueryResult {
            columns: vec!["Net Sales".into()],
            rows: vec![vec![Cell::Null]],
        };
        assert!(render_query(&result).contains("NULL"));
    }
}
