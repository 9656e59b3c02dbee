//! Dashboard snapshot assembly.
//!
//! One snapshot is the complete render model for a selector value: the KPI
//! row plus the six chart tables, rebuilt from scratch on every selection
//! change. The pipeline is pure — no state survives between snapshots apart
//! from the memoized dataset itself.

use chrono::Utc;
use dash_core::models::{AgentFilter, AggregateTable, Dataset, GroupKey, KpiSet, ValueField};

use crate::aggregator::SalesAggregator;
use crate::pipeline::filter_by_agent;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the snapshot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SnapshotMetadata {
    /// ISO-8601 timestamp when this snapshot was generated.
    pub generated_at: String,
    /// The selector string the snapshot was built for.
    pub selector: String,
    /// Row count of the unfiltered dataset.
    pub source_rows: usize,
    /// Row count after the agent filter.
    pub filtered_rows: usize,
    /// Wall-clock seconds spent filtering and aggregating.
    pub build_time_seconds: f64,
}

/// The complete output of [`build_snapshot`] — everything the UI renders.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// The four top-of-dashboard scalars.
    pub kpis: KpiSet,
    /// Agent × summed revenue.
    pub agent_revenue: AggregateTable,
    /// Agent × summed selling.
    pub agent_selling: AggregateTable,
    /// Company × summed selling.
    pub company_selling: AggregateTable,
    /// Year-month composite × row count.
    pub monthly_counts: AggregateTable,
    /// Payment mode/status × summed selling.
    pub payment_selling: AggregateTable,
    /// Agent × summed gross profit.
    pub agent_gross_profit: AggregateTable,
    /// Metadata about this snapshot build.
    pub metadata: SnapshotMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Build the full render model for one agent selection.
///
/// 1. Filter rows by `filter`.
/// 2. Compute the KPI set over the filtered rows.
/// 3. Compute the six grouped tables over the filtered rows.
pub fn build_snapshot(dataset: &Dataset, filter: &AgentFilter) -> DashboardSnapshot {
    let build_start = std::time::Instant::now();

    let filtered = filter_by_agent(dataset, filter);

    let kpis = SalesAggregator::compute_kpis(&filtered);
    let agent_revenue = SalesAggregator::aggregate(&filtered, GroupKey::Agent, ValueField::Revenue);
    let agent_selling = SalesAggregator::aggregate(&filtered, GroupKey::Agent, ValueField::Selling);
    let company_selling =
        SalesAggregator::aggregate(&filtered, GroupKey::Company, ValueField::Selling);
    let monthly_counts =
        SalesAggregator::aggregate(&filtered, GroupKey::YearMonth, ValueField::Count);
    let payment_selling =
        SalesAggregator::aggregate(&filtered, GroupKey::PaymentMode, ValueField::Selling);
    let agent_gross_profit =
        SalesAggregator::aggregate(&filtered, GroupKey::Agent, ValueField::GrossProfit);

    let metadata = SnapshotMetadata {
        generated_at: Utc::now().to_rfc3339(),
        selector: filter.label().to_string(),
        source_rows: dataset.len(),
        filtered_rows: filtered.len(),
        build_time_seconds: build_start.elapsed().as_secs_f64(),
    };

    DashboardSnapshot {
        kpis,
        agent_revenue,
        agent_selling,
        company_selling,
        monthly_counts,
        payment_selling,
        agent_gross_profit,
        metadata,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
