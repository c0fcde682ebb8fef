//! Coverage interval model.
//!
//! A [`CoverageInterval`] is one contiguous span during which one person is on
//! call. Its weekday/weekend day counts are derived once, when it is built.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::{DayCounts, classify_days, covered_dates};
use crate::error::{EngineError, EngineResult};

/// Endpoints of a coverage interval as they arrive over the wire.
///
/// Any counts present in the input are ignored; they are always derived from
/// the endpoints.
#[derive(Debug, Clone, Deserialize)]
struct CoverageEndpoints {
    since: DateTime<FixedOffset>,
    until: DateTime<FixedOffset>,
}

impl From<CoverageEndpoints> for CoverageInterval {
    fn from(endpoints: CoverageEndpoints) -> Self {
        CoverageInterval::new(endpoints.since, endpoints.until)
    }
}

/// One contiguous on-call span for one person.
///
/// Both endpoints keep the UTC offset they were observed in. Construction
/// never fails: an `until` that precedes `since` simply covers no dates.
///
/// # Example
///
/// ```
/// use ooh_pay::models::CoverageInterval;
/// use chrono::DateTime;
///
/// let interval = CoverageInterval::new(
///     DateTime::parse_from_rfc3339("2024-08-01T00:00:00+01:00").unwrap(),
///     DateTime::parse_from_rfc3339("2024-08-12T10:00:00+01:00").unwrap(),
/// );
/// assert_eq!(interval.weekday_count(), 5);
/// assert_eq!(interval.weekend_count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CoverageEndpoints")]
pub struct CoverageInterval {
    since: DateTime<FixedOffset>,
    until: DateTime<FixedOffset>,
    weekday_count: u64,
    weekend_count: u64,
}

impl CoverageInterval {
    /// Creates an interval and classifies the calendar dates it covers.
    pub fn new(since: DateTime<FixedOffset>, until: DateTime<FixedOffset>) -> Self {
        let counts = classify_days(&since, &until);
        Self {
            since,
            until,
            weekday_count: counts.weekday,
            weekend_count: counts.weekend,
        }
    }

    /// Parses both endpoints as RFC 3339 timestamps and builds the interval.
    ///
    /// # Example
    ///
    /// ```
    /// use ooh_pay::models::CoverageInterval;
    ///
    /// let interval =
    ///     CoverageInterval::parse("2024-09-20T20:00:00+01:00", "2024-09-23T10:00:00+01:00")?;
    /// assert_eq!(interval.weekend_count(), 3);
    /// assert!(CoverageInterval::parse("not a date", "2024-09-23T10:00:00+01:00").is_err());
    /// # Ok::<(), ooh_pay::error::EngineError>(())
    /// ```
    pub fn parse(since: &str, until: &str) -> EngineResult<Self> {
        Ok(Self::new(
            parse_endpoint("since", since)?,
            parse_endpoint("until", until)?,
        ))
    }

    /// The start of the interval.
    pub fn since(&self) -> DateTime<FixedOffset> {
        self.since
    }

    /// The end of the interval. Its own calendar date is never counted.
    pub fn until(&self) -> DateTime<FixedOffset> {
        self.until
    }

    /// Number of covered Monday-Thursday dates.
    pub fn weekday_count(&self) -> u64 {
        self.weekday_count
    }

    /// Number of covered Friday-Sunday dates.
    pub fn weekend_count(&self) -> u64 {
        self.weekend_count
    }

    /// Both counts together.
    pub fn day_counts(&self) -> DayCounts {
        DayCounts {
            weekday: self.weekday_count,
            weekend: self.weekend_count,
        }
    }

    /// The calendar dates this interval covers, in order.
    pub fn covered_dates(&self) -> Vec<NaiveDate> {
        covered_dates(&self.since, &self.until).collect()
    }
}

fn parse_endpoint(field: &str, value: &str) -> EngineResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|_| EngineError::InvalidTimestamp {
        field: field.to_string(),
        value: value.to_string(),
    })
}
