//! Coercion of raw upstream records into canonical transaction records.
//!
//! Normalization is deliberately tolerant: a record with a missing or
//! unparseable date is dropped and counted in the logs, while a record with
//! a missing or unparseable amount keeps its date but contributes nothing to
//! totals. Bad data never aborts the pipeline.

use time::{Date, OffsetDateTime, format_description::well_known::Iso8601};

use crate::record::models::{RawAmount, RawDate, RawRecord, RecordKind, TransactionRecord};

/// Converts raw upstream records into [TransactionRecord]s of the given kind.
///
/// Records whose date cannot be parsed are excluded from the output.
/// Amounts that are missing, unparseable, non-finite or negative are coerced
/// to zero so they can never propagate a negative sign into totals. Missing
/// or blank labels receive the default for `kind`.
pub fn normalize(raw_records: &[RawRecord], kind: RecordKind) -> Vec<TransactionRecord> {
    let mut records = Vec::with_capacity(raw_records.len());
    let mut dropped = 0usize;

    for raw in raw_records {
        let Some(date) = raw.date.as_ref().and_then(parse_date) else {
            dropped += 1;
            tracing::warn!(
                "dropping {kind:?} record {:?}: missing or unparseable date",
                raw.id
            );
            continue;
        };

        records.push(TransactionRecord {
            id: raw.id.clone(),
            kind,
            date,
            amount: parse_amount(raw.amount.as_ref()),
            label: normalize_label(raw.label.as_deref(), kind),
        });
    }

    if dropped > 0 {
        tracing::debug!(
            "normalized {} of {} {kind:?} records ({dropped} dropped)",
            records.len(),
            raw_records.len()
        );
    }

    records
}

fn parse_date(raw: &RawDate) -> Option<Date> {
    match raw {
        RawDate::Text(text) => Date::parse(text, &Iso8601::DEFAULT)
            .or_else(|_| OffsetDateTime::parse(text, &Iso8601::DEFAULT).map(|moment| moment.date()))
            .ok(),
        RawDate::EpochSeconds(seconds) => OffsetDateTime::from_unix_timestamp(*seconds)
            .map(|moment| moment.date())
            .ok(),
    }
}

fn parse_amount(raw: Option<&RawAmount>) -> f64 {
    let value = match raw {
        Some(RawAmount::Number(value)) => *value,
        Some(RawAmount::Text(text)) => text.trim().parse().unwrap_or(0.0),
        None => 0.0,
    };

    // Negative amounts are not meaningful for this engine.
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn normalize_label(label: Option<&str>, kind: RecordKind) -> String {
    match label.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_owned(),
        _ => kind.default_label().to_owned(),
    }
}
