//! Applies date-range and allow-list filters to normalized records.

use crate::{
    filter::spec::FilterSpec,
    record::{RecordKind, TransactionRecord},
};

/// Returns the records that pass the date-range and allow-list filters.
///
/// The expense and revenue series are filtered independently: `categories`
/// only restricts expense records and `sources` only restricts revenue
/// records. Filtering is idempotent and order-preserving.
pub fn apply(records: &[TransactionRecord], spec: &FilterSpec) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|record| in_date_range(record, spec) && label_allowed(record, spec))
        .cloned()
        .collect()
}

fn in_date_range(record: &TransactionRecord, spec: &FilterSpec) -> bool {
    spec.date_range
        .map(|range| range.contains(record.date))
        .unwrap_or(true)
}

fn label_allowed(record: &TransactionRecord, spec: &FilterSpec) -> bool {
    let allow_list = match record.kind {
        RecordKind::Expense => &spec.categories,
        RecordKind::Revenue => &spec.sources,
    };

    allow_list.is_empty() || allow_list.contains(&record.label)
}
