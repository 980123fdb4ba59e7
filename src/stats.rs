//! Per-category spending statistics for expense cards.
//!
//! Compares each category's reference-month spend against its historical
//! monthly average, the way dashboard expense cards surface overspending and
//! savings. Like the trend comparator, this runs on the full normalized
//! record set rather than the filtered one.

use std::collections::HashMap;

use serde::Serialize;
use time::Date;

use crate::{breakdown::percent_of, bucket::range::month_start, record::TransactionRecord};

/// Spending statistics for a single expense category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpendingStats {
    /// The category name.
    pub label: String,
    /// Total spent in the reference month up to the reference date.
    pub current_month_amount: f64,
    /// Share of the reference month's total spend, 0-100 with one decimal.
    pub percentage_of_total: f64,
    /// Mean monthly spend over the months before the reference month.
    pub monthly_average: f64,
    /// Change of the current month against the monthly average, as a
    /// percentage; 0 when there is no historical average.
    pub percentage_change: f64,
    /// Yearly impact of the current deviation from the average.
    pub annual_delta: f64,
    /// Number of distinct months with data for this category.
    pub months_of_data: usize,
}

/// Computes per-category spending statistics anchored at `reference_date`.
///
/// Records dated after `reference_date` are ignored so the "current month"
/// figures are month-to-date. Categories are sorted descending by current
/// spend with ties broken by label.
pub fn category_spending_stats(
    records: &[TransactionRecord],
    reference_date: Date,
) -> Vec<CategorySpendingStats> {
    let current_month = month_start(reference_date);

    let mut monthly: HashMap<&str, HashMap<Date, f64>> = HashMap::new();
    for record in records {
        if record.date > reference_date {
            continue;
        }

        let per_month = monthly.entry(record.label.as_str()).or_default();
        *per_month.entry(month_start(record.date)).or_insert(0.0) += record.amount;
    }

    let current_total: f64 = monthly
        .values()
        .filter_map(|months| months.get(&current_month))
        .sum();

    let mut stats: Vec<CategorySpendingStats> = monthly
        .into_iter()
        .map(|(label, months)| {
            let current = months.get(&current_month).copied().unwrap_or(0.0);
            let months_of_data = months.len();

            let history: Vec<f64> = months
                .iter()
                .filter(|(month, _)| **month < current_month)
                .map(|(_, total)| *total)
                .collect();
            let monthly_average = if history.is_empty() {
                0.0
            } else {
                history.iter().sum::<f64>() / history.len() as f64
            };
            let percentage_change = if monthly_average == 0.0 {
                0.0
            } else {
                (current - monthly_average) / monthly_average * 100.0
            };

            CategorySpendingStats {
                label: label.to_owned(),
                current_month_amount: current,
                percentage_of_total: percent_of(current, current_total),
                monthly_average,
                percentage_change,
                annual_delta: (current - monthly_average) * 12.0,
                months_of_data,
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.current_month_amount
            .partial_cmp(&a.current_month_amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    stats
}
