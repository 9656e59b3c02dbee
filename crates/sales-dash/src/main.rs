mod bootstrap;

use anyhow::Result;
use dash_core::error::DashboardError;
use dash_core::formatting::{format_currency, format_number};
use dash_core::models::AggregateTable;
use dash_core::settings::Settings;
use dash_data::snapshot::DashboardSnapshot;
use dash_runtime::engine::DashboardEngine;
use dash_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Sales Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Theme: {}, Agent: {}",
        settings.view,
        settings.theme,
        settings.agent
    );

    let data_file = match settings
        .data_file
        .clone()
        .or_else(bootstrap::discover_data_file)
    {
        Some(path) => path,
        None => return Err(DashboardError::NoDataFile.into()),
    };
    tracing::info!("Using sales file {}", data_file.display());

    let mut engine = DashboardEngine::new(data_file)?;
    let snapshot = engine.select(&settings.agent)?;

    match settings.view.as_str() {
        "dashboard" => {
            let app = App::new(&settings.theme, snapshot);

            // Run the TUI event loop. The loop exits on 'q' / Ctrl+C inside the
            // TUI. We also listen for Ctrl+C at the OS level so that signals
            // received while the terminal is in raw mode are handled cleanly.
            tokio::select! {
                result = app.run(engine) => {
                    result?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Ctrl+C received; shutting down");
                }
            }
        }

        "summary" => {
            print_summary(&snapshot);
        }

        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    Ok(())
}

// ── Summary view ──────────────────────────────────────────────────────────────

/// Print the KPI row and all six aggregate tables to stdout once.
fn print_summary(snapshot: &DashboardSnapshot) {
    let kpis = &snapshot.kpis;
    let meta = &snapshot.metadata;

    println!(
        "Sales Summary — {} ({}/{} rows)",
        meta.selector, meta.filtered_rows, meta.source_rows
    );
    println!();
    println!("Total Orders:   {}", format_number(kpis.order_count as f64, 0));
    println!("Total Revenue:  {}", format_currency(kpis.total_revenue));
    println!("Total Selling:  {}", format_currency(kpis.total_selling));
    println!("Total GP:       {}", format_currency(kpis.total_gross_profit));

    print_table("Revenue by Agent", &snapshot.agent_revenue, false);
    print_table("Selling by Agent", &snapshot.agent_selling, false);
    print_table("Company Business", &snapshot.company_selling, false);
    print_table("Month-Wise Orders", &snapshot.monthly_counts, true);
    print_table("Payment Mode/Status", &snapshot.payment_selling, false);
    print_table("Gross Profit by Agent", &snapshot.agent_gross_profit, false);
}

fn print_table(title: &str, table: &AggregateTable, is_count: bool) {
    println!();
    println!("{}", title);
    if table.is_empty() {
        println!("  (no data)");
        return;
    }
    for point in &table.points {
        let value = if is_count {
            format_number(point.value, 0)
        } else {
            format_currency(point.value)
        };
        println!("  {:<28} {}", point.category, value);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::models::AgentFilter;
    use dash_data::snapshot::build_snapshot;
    use std::io::Write;
    use tempfile::TempDir;

    const HEADER: &str = "Date,Agent,Company,Total Revenue,Total Selling,Total GP,Payment Mode/Status";

    fn sample_engine(dir: &TempDir) -> DashboardEngine {
        let path = dir.path().join("sales.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "2024-03-15,Omar,Acme,$100.00,$90.00,$10.00,Paid").unwrap();
        writeln!(file, "2024-03-16,Lena,Globex,$200.00,$180.00,$20.00,Paid").unwrap();
        DashboardEngine::new(path).unwrap()
    }

    #[test]
    fn test_print_summary_does_not_panic() {
        let dir = TempDir::new().unwrap();
        let mut engine = sample_engine(&dir);
        let snapshot = engine.snapshot().unwrap();
        print_summary(&snapshot);
    }

    #[test]
    fn test_print_summary_empty_tables() {
        let snapshot = build_snapshot(&Default::default(), &AgentFilter::All);
        print_summary(&snapshot);
    }
}
