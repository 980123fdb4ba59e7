//! Tallyboard turns raw, unordered lists of financial transactions into
//! time-bucketed trend series, category and source breakdowns, and
//! month-over-month change metrics for a financial dashboard.
//!
//! The engine is a pure, synchronous computation: it consumes raw expense
//! and revenue records plus a [FilterSpec] and produces a serializable
//! [AnalyticsResult] that a charting layer renders. It performs no I/O,
//! holds no state between calls, and never reads the clock; callers thread
//! a reference date through [aggregate], defaulting it to today at the call
//! site.

#![warn(missing_docs)]

mod breakdown;
mod bucket;
mod dashboard;
mod error;
mod filter;
mod record;
mod stats;
mod trend;

pub use breakdown::{BreakdownEntry, breakdown};
pub use bucket::{Bucket, bucket_records};
pub use dashboard::{AnalyticsResult, aggregate};
pub use error::Error;
pub use filter::{DateRange, FilterSpec, Granularity, apply as apply_filters};
pub use record::{
    OTHER_SOURCE_LABEL, RawAmount, RawDate, RawRecord, RecordKind, TransactionRecord,
    UNCATEGORIZED_LABEL, normalize,
};
pub use stats::{CategorySpendingStats, category_spending_stats};
pub use trend::month_over_month_change;
