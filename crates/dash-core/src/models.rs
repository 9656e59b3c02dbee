use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coercion;

/// Sentinel selector value meaning "do not filter by agent".
pub const ALL_AGENTS: &str = "All Agents";

/// A single sales transaction read from one CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date, `None` when the cell could not be parsed.
    pub date: Option<NaiveDate>,
    /// Calendar year derived from `date`.
    pub year: Option<i32>,
    /// Calendar month (1-12) derived from `date`.
    pub month: Option<u32>,
    /// Salesperson identifier.
    pub agent: String,
    /// Customer company identifier.
    pub company: String,
    /// Payment mode / status string.
    pub payment_mode: String,
    /// Total revenue for the transaction, USD.
    #[serde(default)]
    pub revenue: f64,
    /// Total selling amount for the transaction, USD.
    #[serde(default)]
    pub selling: f64,
    /// Total gross profit for the transaction, USD.
    #[serde(default)]
    pub gross_profit: f64,
}

impl Transaction {
    /// Year-month composite key, e.g. `"2024-3"` (no zero padding).
    ///
    /// `None` when the transaction has no parsed date parts.
    pub fn year_month_key(&self) -> Option<String> {
        match (self.year, self.month) {
            (Some(y), Some(m)) => Some(coercion::year_month_key(y, m)),
            _ => None,
        }
    }
}

/// An ordered collection of transactions loaded from one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// The file the rows were loaded from.
    pub source: PathBuf,
    /// Transactions in file order.
    pub rows: Vec<Transaction>,
}

impl Dataset {
    /// Number of transaction rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ── Filtering ─────────────────────────────────────────────────────────────────

/// The agent selector: either the pass-through sentinel or one exact agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentFilter {
    /// `"All Agents"` — no filtering.
    All,
    /// Keep only rows whose agent equals this string exactly
    /// (case-sensitive, no normalization).
    Agent(String),
}

impl AgentFilter {
    /// Build a filter from a selector string. The [`ALL_AGENTS`] sentinel
    /// maps to [`AgentFilter::All`]; anything else is an exact agent name.
    pub fn from_selector(selector: &str) -> Self {
        if selector == ALL_AGENTS {
            AgentFilter::All
        } else {
            AgentFilter::Agent(selector.to_string())
        }
    }

    /// The selector string this filter was built from.
    pub fn label(&self) -> &str {
        match self {
            AgentFilter::All => ALL_AGENTS,
            AgentFilter::Agent(name) => name,
        }
    }

    /// `true` when `tx` passes the filter.
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            AgentFilter::All => true,
            AgentFilter::Agent(name) => tx.agent == *name,
        }
    }
}

// ── Grouping ──────────────────────────────────────────────────────────────────

/// Categorical field a chart groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Agent,
    Company,
    PaymentMode,
    /// Composite `"<year>-<month>"` key; rows without date parts are skipped.
    YearMonth,
}

impl GroupKey {
    /// The group key string for `tx`, or `None` when the row cannot be
    /// assigned to a group (only possible for [`GroupKey::YearMonth`]).
    pub fn key_for(&self, tx: &Transaction) -> Option<String> {
        match self {
            GroupKey::Agent => Some(tx.agent.clone()),
            GroupKey::Company => Some(tx.company.clone()),
            GroupKey::PaymentMode => Some(tx.payment_mode.clone()),
            GroupKey::YearMonth => tx.year_month_key(),
        }
    }
}

/// Numeric field a chart sums per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Revenue,
    Selling,
    GrossProfit,
    /// Each row contributes 1.0 — turns the group-sum into a row count.
    Count,
}

impl ValueField {
    /// The contribution of `tx` to its group's sum.
    pub fn value_of(&self, tx: &Transaction) -> f64 {
        match self {
            ValueField::Revenue => tx.revenue,
            ValueField::Selling => tx.selling,
            ValueField::GrossProfit => tx.gross_profit,
            ValueField::Count => 1.0,
        }
    }

    /// `true` when values of this field are whole-number counts rather than
    /// monetary amounts (controls display formatting).
    pub fn is_count(&self) -> bool {
        matches!(self, ValueField::Count)
    }
}

// ── Aggregates ────────────────────────────────────────────────────────────────

/// One `(category, value)` pair of an aggregate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Group label, e.g. an agent name or `"2024-3"`.
    pub category: String,
    /// Summed value for the group.
    pub value: f64,
}

/// A grouped-and-summed view of the dataset keyed by one categorical field.
///
/// Points are stored in sorted-key order, but no order is part of the
/// contract; chart rendering may reorder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateTable {
    pub points: Vec<ChartPoint>,
}

impl AggregateTable {
    /// Value for `category`, or `None` when the group is absent.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.value)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the table holds no groups.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest group value, or `0.0` for an empty table. Used for bar scaling.
    pub fn max_value(&self) -> f64 {
        self.points.iter().fold(0.0, |acc, p| p.value.max(acc))
    }
}

// ── KPIs ──────────────────────────────────────────────────────────────────────

/// The four summary scalars shown at the top of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    /// Number of transaction rows after filtering.
    pub order_count: u64,
    /// Sum of the revenue field, USD.
    pub total_revenue: f64,
    /// Sum of the selling field, USD.
    pub total_selling: f64,
    /// Sum of the gross-profit field, USD.
    pub total_gross_profit: f64,
}

impl KpiSet {
    /// Revenue per order. Internal value only — never rendered.
    ///
    /// Returns `0.0` for an empty dataset to avoid division by zero.
    pub fn average_order_value(&self) -> f64 {
        if self.order_count == 0 {
            0.0
        } else {
            self.total_revenue / self.order_count as f64
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(agent: &str, date: Option<NaiveDate>, revenue: f64) -> Transaction {
        Transaction {
            date,
            year: date.map(|d| chrono::Datelike::year(&d)),
            month: date.map(|d| chrono::Datelike::month(&d)),
            agent: agent.to_string(),
            company: "Acme".to_string(),
            payment_mode: "Paid".to_string(),
            revenue,
            selling: 0.0,
            gross_profit: 0.0,
        }
    }

    // ── Transaction ───────────────────────────────────────────────────────────

    #[test]
    fn test_year_month_key_no_padding() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let t = tx("Omar", Some(d), 10.0);
        assert_eq!(t.year_month_key().as_deref(), Some("2024-3"));
    }

    #[test]
    fn test_year_month_key_none_without_date() {
        let t = tx("Omar", None, 10.0);
        assert!(t.year_month_key().is_none());
    }

    // ── AgentFilter ───────────────────────────────────────────────────────────

    #[test]
    fn test_filter_from_sentinel() {
        assert_eq!(AgentFilter::from_selector("All Agents"), AgentFilter::All);
    }

    #[test]
    fn test_filter_from_agent_name() {
        assert_eq!(
            AgentFilter::from_selector("Omar"),
            AgentFilter::Agent("Omar".to_string())
        );
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let f = AgentFilter::All;
        assert!(f.matches(&tx("Omar", None, 0.0)));
        assert!(f.matches(&tx("Lena", None, 0.0)));
    }

    #[test]
    fn test_filter_agent_is_case_sensitive() {
        let f = AgentFilter::from_selector("Omar");
        assert!(f.matches(&tx("Omar", None, 0.0)));
        assert!(!f.matches(&tx("omar", None, 0.0)));
        assert!(!f.matches(&tx("Lena", None, 0.0)));
    }

    #[test]
    fn test_filter_label_round_trip() {
        assert_eq!(AgentFilter::All.label(), "All Agents");
        assert_eq!(AgentFilter::from_selector("Lena").label(), "Lena");
    }

    // ── GroupKey / ValueField ─────────────────────────────────────────────────

    #[test]
    fn test_group_key_agent() {
        let t = tx("Omar", None, 0.0);
        assert_eq!(GroupKey::Agent.key_for(&t).as_deref(), Some("Omar"));
        assert_eq!(GroupKey::Company.key_for(&t).as_deref(), Some("Acme"));
        assert_eq!(GroupKey::PaymentMode.key_for(&t).as_deref(), Some("Paid"));
    }

    #[test]
    fn test_group_key_year_month_skips_undated() {
        let t = tx("Omar", None, 0.0);
        assert!(GroupKey::YearMonth.key_for(&t).is_none());
    }

    #[test]
    fn test_value_field_count_is_one() {
        let t = tx("Omar", None, 123.0);
        assert_eq!(ValueField::Count.value_of(&t), 1.0);
        assert_eq!(ValueField::Revenue.value_of(&t), 123.0);
        assert!(ValueField::Count.is_count());
        assert!(!ValueField::Revenue.is_count());
    }

    // ── AggregateTable ────────────────────────────────────────────────────────

    #[test]
    fn test_aggregate_table_get() {
        let table = AggregateTable {
            points: vec![
                ChartPoint {
                    category: "Omar".to_string(),
                    value: 10.0,
                },
                ChartPoint {
                    category: "Lena".to_string(),
                    value: 20.0,
                },
            ],
        };
        assert_eq!(table.get("Lena"), Some(20.0));
        assert_eq!(table.get("Nadia"), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.max_value(), 20.0);
    }

    #[test]
    fn test_aggregate_table_empty() {
        let table = AggregateTable::default();
        assert!(table.is_empty());
        assert_eq!(table.max_value(), 0.0);
    }

    // ── KpiSet ────────────────────────────────────────────────────────────────

    #[test]
    fn test_average_order_value() {
        let kpis = KpiSet {
            order_count: 4,
            total_revenue: 100.0,
            total_selling: 0.0,
            total_gross_profit: 0.0,
        };
        assert!((kpis.average_order_value() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_order_value_zero_orders() {
        let kpis = KpiSet::default();
        assert_eq!(kpis.average_order_value(), 0.0);
    }
}
