//! Dataset construction and filtering.
//!
//! Turns a [`RawTable`] of string cells into typed [`Transaction`] rows:
//! monetary columns are money-coerced, the date column is parsed with year
//! and month derived from it, and everything else stays text. Cleaning is
//! applied to the declared monetary columns only — the agent, company, date
//! and payment columns are never run through numeric coercion.

use std::collections::HashSet;
use std::path::Path;

use chrono::Datelike;
use dash_core::coercion::{self, MoneyParser};
use dash_core::error::{DashboardError, Result};
use dash_core::models::{AgentFilter, Dataset, Transaction, ALL_AGENTS};
use tracing::debug;

use crate::reader::RawTable;

// ── Dataset construction ──────────────────────────────────────────────────────

/// Build a typed [`Dataset`] from a raw table.
///
/// Cell-level failures never abort the build: unparseable money becomes
/// `0.0`, unparseable dates become `None`.
pub fn build_dataset(table: &RawTable, source: &Path) -> Result<Dataset> {
    let date_idx = column(table, source, "Date")?;
    let agent_idx = column(table, source, "Agent")?;
    let company_idx = column(table, source, "Company")?;
    let revenue_idx = column(table, source, "Total Revenue")?;
    let selling_idx = column(table, source, "Total Selling")?;
    let gp_idx = column(table, source, "Total GP")?;
    let payment_idx = column(table, source, "Payment Mode/Status")?;

    let money = MoneyParser::new();

    let mut rows = Vec::with_capacity(table.rows.len());
    for raw in &table.rows {
        let date = coercion::parse_date(cell(raw, date_idx));
        rows.push(Transaction {
            date,
            year: date.map(|d| d.year()),
            month: date.map(|d| d.month()),
            agent: cell(raw, agent_idx).to_string(),
            company: cell(raw, company_idx).to_string(),
            payment_mode: cell(raw, payment_idx).to_string(),
            revenue: money.parse(cell(raw, revenue_idx)),
            selling: money.parse(cell(raw, selling_idx)),
            gross_profit: money.parse(cell(raw, gp_idx)),
        });
    }

    debug!("Built dataset with {} rows from {}", rows.len(), source.display());

    Ok(Dataset {
        source: source.to_path_buf(),
        rows,
    })
}

/// Keep only rows passing `filter`. The All-Agents filter returns the
/// dataset unchanged, so re-selecting it reproduces the unfiltered tables
/// exactly.
pub fn filter_by_agent(dataset: &Dataset, filter: &AgentFilter) -> Dataset {
    match filter {
        AgentFilter::All => dataset.clone(),
        AgentFilter::Agent(_) => Dataset {
            source: dataset.source.clone(),
            rows: dataset
                .rows
                .iter()
                .filter(|tx| filter.matches(tx))
                .cloned()
                .collect(),
        },
    }
}

/// Selector options: the All-Agents sentinel followed by the distinct agent
/// names in first-seen dataset order.
pub fn agent_options(dataset: &Dataset) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options = vec![ALL_AGENTS.to_string()];
    for tx in &dataset.rows {
        if seen.insert(tx.agent.as_str()) {
            options.push(tx.agent.clone());
        }
    }
    options
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn column(table: &RawTable, source: &Path, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| DashboardError::MissingColumn {
            column: name.to_string(),
            path: source.to_path_buf(),
        })
}

/// Cell at `idx`, empty for short records (the reader is flexible about
/// record length).
fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
