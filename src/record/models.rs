//! Transaction record shapes used by the aggregation pipeline.
//!
//! This is a simplified view of a transaction optimized for dashboard
//! aggregations, containing only the fields needed for charting (kind,
//! date, amount, label).

use serde::{Deserialize, Serialize};
use time::Date;

/// The label assigned to expense records that arrive without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// The label assigned to revenue records that arrive without a source.
pub const OTHER_SOURCE_LABEL: &str = "Other";

/// Whether a record is money going out (expense) or coming in (revenue).
///
/// The kind is fixed at normalization time and never changes afterwards.
/// Expense and revenue records are processed as two parallel series and are
/// only combined at the bucket level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Money going out; grouped by category.
    Expense,
    /// Money coming in; grouped by source.
    Revenue,
}

impl RecordKind {
    /// The label used when a record of this kind has no category or source.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Expense => UNCATEGORIZED_LABEL,
            Self::Revenue => OTHER_SOURCE_LABEL,
        }
    }
}

/// A raw record as supplied by the upstream data provider.
///
/// Upstream APIs are loose about types: dates arrive as ISO-8601 strings or
/// epoch seconds, amounts as numbers or numeric strings, and the label field
/// may be missing entirely. [crate::normalize] coerces these into
/// [TransactionRecord]s.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Opaque unique identifier.
    pub id: String,
    /// Calendar timestamp of the transaction, if present.
    #[serde(default)]
    pub date: Option<RawDate>,
    /// Transaction amount in the organization's base currency unit.
    #[serde(default)]
    pub amount: Option<RawAmount>,
    /// Category for expenses, source for revenue.
    #[serde(default, alias = "category", alias = "source")]
    pub label: Option<String>,
}

/// A date value as found in upstream payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    /// An ISO-8601 date or date-time string, e.g. "2024-01-05".
    Text(String),
    /// Seconds since the Unix epoch.
    EpochSeconds(i64),
}

/// An amount value as found in upstream payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A plain number.
    Number(f64),
    /// A numeric string, e.g. "123.45".
    Text(String),
}

/// A normalized transaction ready for filtering and aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// Opaque unique identifier carried over from the raw record.
    pub id: String,
    /// Whether this record counts towards expenses or revenue.
    pub kind: RecordKind,
    /// The transaction date; always a valid calendar date.
    pub date: Date,
    /// The transaction amount; always finite and non-negative.
    pub amount: f64,
    /// Category for expenses, source for revenue; never empty.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::{RawRecord, RecordKind};

    #[test]
    fn default_label_depends_on_kind() {
        assert_eq!(RecordKind::Expense.default_label(), "Uncategorized");
        assert_eq!(RecordKind::Revenue.default_label(), "Other");
    }

    #[test]
    fn raw_record_accepts_category_and_source_aliases() {
        let from_category: RawRecord =
            serde_json::from_str(r#"{"id": "a", "date": "2024-01-05", "category": "Rent"}"#)
                .unwrap();
        let from_source: RawRecord =
            serde_json::from_str(r#"{"id": "b", "date": 1704412800, "source": "Sales"}"#).unwrap();

        assert_eq!(from_category.label.as_deref(), Some("Rent"));
        assert_eq!(from_source.label.as_deref(), Some("Sales"));
    }

    #[test]
    fn raw_record_accepts_numeric_string_amounts() {
        let record: RawRecord =
            serde_json::from_str(r#"{"id": "a", "date": "2024-01-05", "amount": "123.45"}"#)
                .unwrap();

        assert!(matches!(record.amount, Some(super::RawAmount::Text(_))));
    }
}
