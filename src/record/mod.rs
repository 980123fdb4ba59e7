//! Canonical record types and normalization of raw upstream data.
//!
//! The aggregation pipeline only ever sees [TransactionRecord]s; everything
//! the upstream data provider sends passes through [normalize] first.

mod models;
mod normalize;

pub use models::{
    OTHER_SOURCE_LABEL, RawAmount, RawDate, RawRecord, RecordKind, TransactionRecord,
    UNCATEGORIZED_LABEL,
};
pub use normalize::normalize;
