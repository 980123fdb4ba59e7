//! Builds the time-bucketed expense/revenue series for trend charts.
//!
//! Records are folded into per-period totals with a hash map, then a sort
//! and format pass turns the totals into ordered [Bucket] rows. Expense and
//! revenue records share the same buckets but accumulate separately; the net
//! value is a single final subtraction per bucket.

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Duration};

use crate::{
    bucket::range::{day_label, month_key, month_label, month_start, week_start},
    filter::Granularity,
    record::{RecordKind, TransactionRecord},
};

/// Number of days covered by the daily trend window.
const DAILY_WINDOW_DAYS: i64 = 30;

/// Number of trailing weeks covered by the weekly trend window.
const WEEKLY_WINDOW_WEEKS: i64 = 12;

/// Number of most recent months retained by the monthly series.
const MONTHLY_WINDOW_MONTHS: usize = 12;

/// One row of the time-bucketed trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    /// Canonical sortable identifier for the period: an ISO date for daily
    /// and weekly buckets, `YYYY-MM` for monthly buckets.
    pub period_key: String,
    /// Human-readable label derived from the period and granularity.
    pub period_label: String,
    /// Sum of expense amounts in the period.
    pub expenses: f64,
    /// Sum of revenue amounts in the period.
    pub revenue: f64,
    /// Revenue minus expenses; may be negative.
    pub net: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct BucketTotals {
    expenses: f64,
    revenue: f64,
}

/// Groups records into ordered buckets at the requested granularity.
///
/// The daily series covers a fixed 30-day window ending at `reference_date`
/// and synthesizes a bucket for every day so the chart has no gaps, even
/// when no record falls in the window. The weekly series covers the trailing
/// 12 calendar weeks, keyed by each week's Monday; weeks without records are
/// omitted. The monthly series groups the entire input by calendar month and
/// retains the most recent 12 months.
///
/// Output is always sorted ascending by period key regardless of input
/// order.
pub fn bucket_records(
    records: &[TransactionRecord],
    granularity: Granularity,
    reference_date: Date,
) -> Vec<Bucket> {
    match granularity {
        Granularity::Daily => daily_series(records, reference_date),
        Granularity::Weekly => weekly_series(records, reference_date),
        Granularity::Monthly => monthly_series(records),
    }
}

fn daily_series(records: &[TransactionRecord], reference_date: Date) -> Vec<Bucket> {
    let window_start = reference_date - Duration::days(DAILY_WINDOW_DAYS - 1);
    let totals = aggregate_by(records, |record| {
        (window_start <= record.date && record.date <= reference_date).then_some(record.date)
    });

    (0..DAILY_WINDOW_DAYS)
        .map(|offset| {
            let day = window_start + Duration::days(offset);
            let day_totals = totals.get(&day).copied().unwrap_or_default();

            into_bucket(day.to_string(), day_label(day), day_totals)
        })
        .collect()
}

fn weekly_series(records: &[TransactionRecord], reference_date: Date) -> Vec<Bucket> {
    let window_start = reference_date - Duration::days(7 * WEEKLY_WINDOW_WEEKS - 1);
    let totals = aggregate_by(records, |record| {
        (window_start <= record.date && record.date <= reference_date)
            .then(|| week_start(record.date))
    });

    let mut weeks: Vec<Date> = totals.keys().copied().collect();
    weeks.sort();

    weeks
        .into_iter()
        .map(|week| {
            let label = format!("Week of {}", day_label(week));

            into_bucket(week.to_string(), label, totals[&week])
        })
        .collect()
}

fn monthly_series(records: &[TransactionRecord]) -> Vec<Bucket> {
    let totals = aggregate_by(records, |record| Some(month_start(record.date)));

    let mut months: Vec<Date> = totals.keys().copied().collect();
    months.sort();

    // Retain only the most recent months so old data does not stretch the
    // chart's x-axis.
    let skip = months.len().saturating_sub(MONTHLY_WINDOW_MONTHS);

    months
        .into_iter()
        .skip(skip)
        .map(|month| into_bucket(month_key(month), month_label(month), totals[&month]))
        .collect()
}

/// Folds records into per-period totals, skipping records for which
/// `period_of` returns `None`.
fn aggregate_by(
    records: &[TransactionRecord],
    period_of: impl Fn(&TransactionRecord) -> Option<Date>,
) -> HashMap<Date, BucketTotals> {
    let mut totals: HashMap<Date, BucketTotals> = HashMap::new();

    for record in records {
        let Some(period) = period_of(record) else {
            continue;
        };

        let entry = totals.entry(period).or_default();
        match record.kind {
            RecordKind::Expense => entry.expenses += record.amount,
            RecordKind::Revenue => entry.revenue += record.amount,
        }
    }

    totals
}

fn into_bucket(period_key: String, period_label: String, totals: BucketTotals) -> Bucket {
    Bucket {
        period_key,
        period_label,
        expenses: totals.expenses,
        revenue: totals.revenue,
        net: totals.revenue - totals.expenses,
    }
}
