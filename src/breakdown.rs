//! Category and source breakdowns with percentage shares.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::TransactionRecord;

/// One group of a category or source breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    /// Category name for expense breakdowns, source name for revenue ones.
    pub label: String,
    /// Sum of amounts in the group.
    pub total: f64,
    /// Share of the filtered total, 0-100 with one decimal place.
    pub percentage: f64,
}

/// Groups records by label and computes each group's share of the total.
///
/// The records are expected to be a single kind; the expense and revenue
/// breakdowns are separate calls that never share group keys. The
/// denominator defaults to the sum over `records`; pass `total_override` to
/// compute shares against another total. A zero denominator yields zero
/// percentages rather than NaN. Entries are sorted descending by total with
/// ties broken by label, so the output is deterministic.
pub fn breakdown(
    records: &[TransactionRecord],
    total_override: Option<f64>,
) -> Vec<BreakdownEntry> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for record in records {
        *totals.entry(record.label.as_str()).or_insert(0.0) += record.amount;
    }

    let denominator = total_override.unwrap_or_else(|| totals.values().sum());

    let mut entries: Vec<BreakdownEntry> = totals
        .into_iter()
        .map(|(label, total)| BreakdownEntry {
            label: label.to_owned(),
            total,
            percentage: percent_of(total, denominator),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    entries
}

/// Percentage of `value` relative to `total`, rounded to one decimal place.
///
/// Returns 0 when `total` is zero so empty datasets never produce NaN.
pub(crate) fn percent_of(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        (value / total * 1000.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{breakdown, percent_of};
    use crate::record::{RecordKind, TransactionRecord};

    fn expense(amount: f64, label: &str) -> TransactionRecord {
        TransactionRecord {
            id: format!("{label}-{amount}"),
            kind: RecordKind::Expense,
            date: date!(2024 - 01 - 15),
            amount,
            label: label.to_owned(),
        }
    }

    #[test]
    fn groups_and_sums_by_label() {
        let records = vec![
            expense(100.0, "Rent"),
            expense(50.0, "Rent"),
            expense(200.0, "Travel"),
        ];

        let entries = breakdown(&records, None);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Travel");
        assert_eq!(entries[0].total, 200.0);
        assert_eq!(entries[1].label, "Rent");
        assert_eq!(entries[1].total, 150.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let records = vec![
            expense(100.0, "Rent"),
            expense(100.0, "Travel"),
            expense(100.0, "Food"),
        ];

        let entries = breakdown(&records, None);

        let sum: f64 = entries.iter().map(|entry| entry.percentage).sum();
        assert!((sum - 100.0).abs() < 0.2, "percentages summed to {sum}");
    }

    #[test]
    fn percentages_have_one_decimal_place() {
        let records = vec![expense(1.0, "Rent"), expense(2.0, "Travel")];

        let entries = breakdown(&records, None);

        assert_eq!(entries[0].percentage, 66.7);
        assert_eq!(entries[1].percentage, 33.3);
    }

    #[test]
    fn zero_total_yields_zero_percentages() {
        let records = vec![expense(0.0, "Rent"), expense(0.0, "Travel")];

        let entries = breakdown(&records, None);

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.percentage == 0.0));
        assert!(entries.iter().all(|entry| !entry.percentage.is_nan()));
    }

    #[test]
    fn empty_input_yields_empty_breakdown() {
        assert!(breakdown(&[], None).is_empty());
    }

    #[test]
    fn ties_are_broken_by_label() {
        let records = vec![
            expense(50.0, "Zoo"),
            expense(50.0, "Aquarium"),
            expense(50.0, "Museum"),
        ];

        let entries = breakdown(&records, None);

        let labels: Vec<&str> = entries.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["Aquarium", "Museum", "Zoo"]);
    }

    #[test]
    fn total_override_changes_the_denominator() {
        let records = vec![expense(50.0, "Rent")];

        let entries = breakdown(&records, Some(200.0));

        assert_eq!(entries[0].percentage, 25.0);
    }

    #[test]
    fn percent_of_guards_division_by_zero() {
        assert_eq!(percent_of(50.0, 0.0), 0.0);
        assert_eq!(percent_of(1.0, 3.0), 33.3);
    }
}
