//! Grouped aggregation over the transaction dataset.
//!
//! Every chart on the dashboard is one group-by-sum (or group-by-count)
//! produced here; the KPI row is the degenerate no-grouping case.

use std::collections::BTreeMap;

use dash_core::models::{AggregateTable, ChartPoint, Dataset, GroupKey, KpiSet, ValueField};

/// Stateless helper that groups and sums transactions.
pub struct SalesAggregator;

impl SalesAggregator {
    /// Group rows by `group_key`, summing `value_field` per group.
    ///
    /// Rows that cannot be assigned a group key (undated rows under
    /// [`GroupKey::YearMonth`]) are skipped. Output points carry sorted keys,
    /// but no order is guaranteed by contract.
    pub fn aggregate(
        dataset: &Dataset,
        group_key: GroupKey,
        value_field: ValueField,
    ) -> AggregateTable {
        let mut map: BTreeMap<String, f64> = BTreeMap::new();

        for tx in &dataset.rows {
            let Some(key) = group_key.key_for(tx) else {
                continue;
            };
            *map.entry(key).or_insert(0.0) += value_field.value_of(tx);
        }

        AggregateTable {
            points: map
                .into_iter()
                .map(|(category, value)| ChartPoint { category, value })
                .collect(),
        }
    }

    /// Compute the four dashboard KPIs over (already filtered) rows.
    pub fn compute_kpis(dataset: &Dataset) -> KpiSet {
        let mut kpis = KpiSet {
            order_count: dataset.len() as u64,
            ..KpiSet::default()
        };
        for tx in &dataset.rows {
            kpis.total_revenue += tx.revenue;
            kpis.total_selling += tx.selling;
            kpis.total_gross_profit += tx.gross_profit;
        }
        kpis
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
