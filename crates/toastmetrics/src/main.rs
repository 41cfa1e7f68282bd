mod bootstrap;
mod report;

use anyhow::Result;
use metrics_core::settings::Settings;
use metrics_data::aggregator::{
    bottom_items_by_category, bottom_items_by_quantity, top_items_by_quantity,
    top_items_by_revenue,
};
use metrics_data::assembler::{drop_total_rows, load_all_weeks};
use metrics_store::SalesStore;
use report::Measure;

/// Example ad-hoc query printed at the end of every run.
const TOP_FOOD_REVENUE_SQL: &str = "\
    SELECT \"Item Name\", SUM(\"Net Sales\") AS Total_Revenue \
    FROM sales \
    WHERE \"Sales Category\" = 'Food' \
    GROUP BY \"Item Name\" \
    ORDER BY Total_Revenue DESC \
    LIMIT 5";

fn main() -> Result<()> {
    bootstrap::setup_logging()?;

    let settings = Settings::resolve();
    tracing::info!("ToastMetrics v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data dir: {}, store: {}",
        settings.base_dir.display(),
        settings.db_path.display()
    );

    let unified = load_all_weeks(&settings.base_dir)?;
    if unified.is_empty() {
        eprintln!("No data loaded - check folder path / file names.");
        std::process::exit(1);
    }

    // POS exports carry subtotal/grand-total rows; they are not sellable
    // items and must not reach the store or the reports.
    let items = drop_total_rows(&unified)?;

    let store = SalesStore::new(&settings.db_path);
    store.replace_sales(&items)?;
    println!("Data saved to {}", settings.db_path.display());

    let n = settings.top_n;

    println!("\n=== TOP {} SELLERS (by quantity) ===", n);
    print!(
        "{}",
        report::render_totals(&top_items_by_quantity(&items, n)?, Measure::Quantity)
    );

    println!("\n=== TOP {} BY REVENUE ===", n);
    print!(
        "{}",
        report::render_totals(&top_items_by_revenue(&items, n)?, Measure::Revenue)
    );

    println!("\n=== BOTTOM {} (poor performers) ===", n);
    print!(
        "{}",
        report::render_totals(&bottom_items_by_quantity(&items, n)?, Measure::Quantity)
    );

    println!("\n=== BOTTOM {} FOOD ITEMS ===", n);
    print!(
        "{}",
        report::render_totals(
            &bottom_items_by_category(&items, "Food", n)?,
            Measure::Quantity
        )
    );

    println!("\n=== SQL QUERY: Top 5 Food Items by Revenue ===");
    print!("{}", report::render_query(&store.query(TOP_FOOD_REVENUE_SQL)?));

    Ok(())
}
