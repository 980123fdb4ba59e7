//! Month-over-month trend comparison.

use time::{Date, Duration};

use crate::{bucket::range::month_start, record::TransactionRecord};

/// Computes the percentage change between the reference month-to-date total
/// and the previous calendar month's total.
///
/// The current period runs from the first of the reference month up to and
/// including `reference_date`; the previous period is the full preceding
/// calendar month. The trend always reflects the whole dataset: callers
/// pass unfiltered records so the indicator tracks overall business
/// movement rather than the currently filtered subset.
///
/// A zero previous month yields a change of 0 by policy, never a division
/// by zero.
pub fn month_over_month_change(records: &[TransactionRecord], reference_date: Date) -> f64 {
    let current_start = month_start(reference_date);
    let previous_end = current_start - Duration::days(1);
    let previous_start = month_start(previous_end);

    let current = sum_in_range(records, current_start, reference_date);
    let previous = sum_in_range(records, previous_start, previous_end);

    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

fn sum_in_range(records: &[TransactionRecord], start: Date, end: Date) -> f64 {
    records
        .iter()
        .filter(|record| start <= record.date && record.date <= end)
        .map(|record| record.amount)
        .sum()
}
