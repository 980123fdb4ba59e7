//! Defines the crate level error type for invalid aggregation requests.

use time::Date;

/// The errors that may occur while building dashboard analytics.
///
/// Data quality problems (unparseable dates or amounts in individual
/// records) are absorbed during normalization and never surface here; this
/// type only covers invalid requests from the calling application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The filter's date range starts after it ends.
    ///
    /// Callers should treat this as a programming error in the surrounding
    /// application rather than a data quality issue. The aggregation call
    /// that received the range produces no partial result.
    #[error("invalid date range: start {0} is after end {1}")]
    InvalidDateRange(Date, Date),

    /// A granularity string did not match any known bucketing resolution.
    #[error("unknown granularity \"{0}\", expected one of \"daily\", \"weekly\" or \"monthly\"")]
    UnknownGranularity(String),
}
