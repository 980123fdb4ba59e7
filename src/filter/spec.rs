//! Filter and granularity settings supplied by the caller.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Deserialize;
use time::Date;

use crate::Error;

/// The time-bucketing resolution selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per day over a fixed 30-day trailing window.
    Daily,
    /// One bucket per calendar week over a 12-week trailing window.
    Weekly,
    /// One bucket per calendar month, most recent 12 months.
    Monthly,
}

impl Granularity {
    /// The granularity used when the caller does not select one.
    pub fn default_granularity() -> Self {
        Self::Monthly
    }

    /// The lowercase form used in query strings and configuration.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// A display label for granularity pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(Error::UnknownGranularity(other.to_owned())),
        }
    }
}

/// An inclusive date range with optional bounds.
///
/// An absent bound means the range is unbounded on that side; a range with
/// both bounds absent contains every date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    /// The earliest date in the range, if bounded below.
    #[serde(default)]
    pub start: Option<Date>,
    /// The latest date in the range, if bounded above.
    #[serde(default)]
    pub end: Option<Date>,
}

impl DateRange {
    /// Whether `date` falls within the bounds that are present.
    pub fn contains(&self, date: Date) -> bool {
        let after_start = self.start.map(|start| start <= date).unwrap_or(true);
        let before_end = self.end.map(|end| date <= end).unwrap_or(true);

        after_start && before_end
    }
}

/// The filter and granularity selection for one aggregation call.
///
/// Immutable per call. Empty allow-lists mean "no restriction", never
/// "reject everything".
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSpec {
    /// Optional inclusive date range restriction.
    #[serde(default)]
    pub date_range: Option<DateRange>,
    /// Allowed expense categories; empty means no restriction.
    #[serde(default)]
    pub categories: HashSet<String>,
    /// Allowed revenue sources; empty means no restriction.
    #[serde(default)]
    pub sources: HashSet<String>,
    /// The bucketing resolution for the trend series.
    #[serde(default = "Granularity::default_granularity")]
    pub granularity: Granularity,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            date_range: None,
            categories: HashSet::new(),
            sources: HashSet::new(),
            granularity: Granularity::default_granularity(),
        }
    }
}

impl FilterSpec {
    /// Checks that the date range bounds are ordered.
    ///
    /// # Errors
    /// Returns [Error::InvalidDateRange] if both bounds are present and the
    /// start is after the end.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(range) = &self.date_range
            && let (Some(start), Some(end)) = (range.start, range.end)
            && start > end
        {
            return Err(Error::InvalidDateRange(start, end));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{DateRange, FilterSpec, Granularity};
    use crate::Error;

    #[test]
    fn granularity_parses_known_values() {
        assert_eq!("daily".parse::<Granularity>(), Ok(Granularity::Daily));
        assert_eq!("weekly".parse::<Granularity>(), Ok(Granularity::Weekly));
        assert_eq!("monthly".parse::<Granularity>(), Ok(Granularity::Monthly));
    }

    #[test]
    fn granularity_rejects_unknown_values() {
        assert_eq!(
            "hourly".parse::<Granularity>(),
            Err(Error::UnknownGranularity("hourly".to_owned()))
        );
    }

    #[test]
    fn granularity_query_values_round_trip() {
        for granularity in [Granularity::Daily, Granularity::Weekly, Granularity::Monthly] {
            assert_eq!(granularity.as_query_value().parse(), Ok(granularity));
        }

        assert_eq!(Granularity::Weekly.label(), "Weekly");
    }

    #[test]
    fn granularity_deserializes_from_lowercase_strings() {
        let granularity: Granularity = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(granularity, Granularity::Weekly);

        assert!(serde_json::from_str::<Granularity>("\"fortnightly\"").is_err());
    }

    #[test]
    fn date_range_respects_absent_bounds() {
        let unbounded = DateRange::default();
        assert!(unbounded.contains(date!(1970 - 01 - 01)));
        assert!(unbounded.contains(date!(2100 - 12 - 31)));

        let from_march = DateRange {
            start: Some(date!(2024 - 03 - 01)),
            end: None,
        };
        assert!(!from_march.contains(date!(2024 - 02 - 29)));
        assert!(from_march.contains(date!(2024 - 03 - 01)));
        assert!(from_march.contains(date!(2030 - 01 - 01)));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let range = DateRange {
            start: Some(date!(2024 - 01 - 01)),
            end: Some(date!(2024 - 01 - 31)),
        };

        assert!(range.contains(date!(2024 - 01 - 01)));
        assert!(range.contains(date!(2024 - 01 - 31)));
        assert!(!range.contains(date!(2024 - 02 - 01)));
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        let spec = FilterSpec {
            date_range: Some(DateRange {
                start: Some(date!(2024 - 02 - 01)),
                end: Some(date!(2024 - 01 - 01)),
            }),
            ..FilterSpec::default()
        };

        assert_eq!(
            spec.validate(),
            Err(Error::InvalidDateRange(
                date!(2024 - 02 - 01),
                date!(2024 - 01 - 01)
            ))
        );
    }

    #[test]
    fn validate_accepts_partial_and_absent_ranges() {
        assert_eq!(FilterSpec::default().validate(), Ok(()));

        let open_ended = FilterSpec {
            date_range: Some(DateRange {
                start: Some(date!(2024 - 02 - 01)),
                end: None,
            }),
            ..FilterSpec::default()
        };
        assert_eq!(open_ended.validate(), Ok(()));
    }
}
