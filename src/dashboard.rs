//! Assembles the full analytics payload consumed by the dashboard.
//!
//! [aggregate] is the only externally-called entry point of the pipeline;
//! the normalizer, filter stage, bucketer, breakdown aggregator and trend
//! comparator are implementation detail behind it.

use serde::Serialize;
use time::Date;

use crate::{
    Error,
    breakdown::{BreakdownEntry, breakdown},
    bucket::{Bucket, bucket_records},
    filter::{self, FilterSpec},
    record::{RawRecord, RecordKind, TransactionRecord, normalize},
    trend::month_over_month_change,
};

/// The complete, serializable analytics payload for one dashboard render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResult {
    /// Time-bucketed expense/revenue/net series at the requested granularity.
    pub trend_buckets: Vec<Bucket>,
    /// Filtered expense totals grouped by category, largest first.
    pub expense_breakdown: Vec<BreakdownEntry>,
    /// Filtered revenue totals grouped by source, largest first.
    pub revenue_breakdown: Vec<BreakdownEntry>,
    /// Sum of all filtered expense amounts.
    pub filtered_total_expenses: f64,
    /// Sum of all filtered revenue amounts.
    pub filtered_total_revenue: f64,
    /// Filtered revenue minus filtered expenses.
    pub filtered_net_income: f64,
    /// Month-over-month change of total expenses, computed on the
    /// unfiltered dataset so the indicator reflects overall movement.
    pub expense_trend_percent: f64,
    /// Whether any record survived filtering. Consumers render an empty
    /// state instead of a zero-filled chart when this is false.
    pub has_data: bool,
}

/// Runs the full aggregation pipeline.
///
/// Normalizes both raw record sets, applies the filters, buckets the
/// combined series at the requested granularity and computes the breakdowns
/// and the expense trend. `reference_date` anchors the daily and weekly
/// windows and the month-over-month comparison; callers pass today's date
/// at the call site so the engine itself never reads the clock.
///
/// # Errors
/// Returns [Error::InvalidDateRange] when the filter's date range starts
/// after it ends. No partial result is produced.
pub fn aggregate(
    expenses: &[RawRecord],
    revenue: &[RawRecord],
    spec: &FilterSpec,
    reference_date: Date,
) -> Result<AnalyticsResult, Error> {
    spec.validate()?;

    let all_expenses = normalize(expenses, RecordKind::Expense);
    let all_revenue = normalize(revenue, RecordKind::Revenue);

    let filtered_expenses = filter::apply(&all_expenses, spec);
    let filtered_revenue = filter::apply(&all_revenue, spec);

    let filtered_total_expenses = total_amount(&filtered_expenses);
    let filtered_total_revenue = total_amount(&filtered_revenue);

    let combined: Vec<TransactionRecord> = filtered_expenses
        .iter()
        .chain(filtered_revenue.iter())
        .cloned()
        .collect();

    Ok(AnalyticsResult {
        trend_buckets: bucket_records(&combined, spec.granularity, reference_date),
        expense_breakdown: breakdown(&filtered_expenses, None),
        revenue_breakdown: breakdown(&filtered_revenue, None),
        filtered_total_expenses,
        filtered_total_revenue,
        filtered_net_income: filtered_total_revenue - filtered_total_expenses,
        expense_trend_percent: month_over_month_change(&all_expenses, reference_date),
        has_data: !filtered_expenses.is_empty() || !filtered_revenue.is_empty(),
    })
}

fn total_amount(records: &[TransactionRecord]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}
