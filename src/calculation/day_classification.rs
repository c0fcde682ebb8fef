//! Day classification for on-call coverage.
//!
//! This module turns a pair of offset-aware instants into the calendar dates
//! they cover and sorts those dates into the weekday (Mon-Thu) and weekend
//! (Fri-Sun) buckets that drive out-of-hours compensation.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The compensation bucket a covered calendar date falls into.
///
/// The weekend bucket starts on Friday: Friday evening on-call load is paid
/// at the weekend rate.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::DayBucket;
///
/// let bucket = DayBucket::Weekend;
/// assert_eq!(bucket.to_string(), "Fri-Sun");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBucket {
    /// Monday through Thursday.
    Weekday,
    /// Friday through Sunday.
    Weekend,
}

impl std::fmt::Display for DayBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayBucket::Weekday => write!(f, "Mon-Thu"),
            DayBucket::Weekend => write!(f, "Fri-Sun"),
        }
    }
}

/// Determines the bucket for a calendar date.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::{get_day_bucket, DayBucket};
/// use chrono::NaiveDate;
///
/// // 2024-09-19 is a Thursday, 2024-09-20 a Friday
/// let thursday = NaiveDate::from_ymd_opt(2024, 9, 19).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2024, 9, 20).unwrap();
/// assert_eq!(get_day_bucket(thursday), DayBucket::Weekday);
/// assert_eq!(get_day_bucket(friday), DayBucket::Weekend);
/// ```
pub fn get_day_bucket(date: NaiveDate) -> DayBucket {
    match date.weekday() {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => DayBucket::Weekend,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => DayBucket::Weekday,
    }
}

/// Number of covered dates per bucket.
///
/// Counts are additive, so a person's totals are the sum of their intervals'
/// counts. They are `u64` so that totals over very long spans cannot wrap.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::DayCounts;
///
/// let a = DayCounts { weekday: 2, weekend: 3 };
/// let b = DayCounts { weekday: 2, weekend: 2 };
/// assert_eq!(a + b, DayCounts { weekday: 4, weekend: 5 });
/// assert_eq!((a + b).total(), 9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayCounts {
    /// Dates that fell on Monday through Thursday.
    pub weekday: u64,
    /// Dates that fell on Friday through Sunday.
    pub weekend: u64,
}

impl DayCounts {
    /// Total number of classified dates.
    pub fn total(&self) -> u64 {
        self.weekday + self.weekend
    }

    /// Counts one more date in `bucket`.
    pub fn record(&mut self, bucket: DayBucket) {
        match bucket {
            DayBucket::Weekday => self.weekday += 1,
            DayBucket::Weekend => self.weekend += 1,
        }
    }
}

impl Add for DayCounts {
    type Output = DayCounts;

    fn add(self, rhs: DayCounts) -> DayCounts {
        DayCounts {
            weekday: self.weekday + rhs.weekday,
            weekend: self.weekend + rhs.weekend,
        }
    }
}

impl AddAssign for DayCounts {
    fn add_assign(&mut self, rhs: DayCounts) {
        *self = *self + rhs;
    }
}

impl Sum for DayCounts {
    fn sum<I: Iterator<Item = DayCounts>>(iter: I) -> DayCounts {
        iter.fold(DayCounts::default(), Add::add)
    }
}

/// Enumerates the calendar dates covered by `[since, until)`.
///
/// Each endpoint is reduced to its calendar date in its own offset, so the
/// two endpoints may carry different offsets (e.g. either side of a
/// daylight-saving change). The date of `until` itself is never included, and
/// an `until` on or before the date of `since` covers nothing.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::covered_dates;
/// use chrono::{DateTime, NaiveDate};
///
/// let since = DateTime::parse_from_rfc3339("2024-09-20T20:00:00+01:00").unwrap();
/// let until = DateTime::parse_from_rfc3339("2024-09-23T10:00:00+01:00").unwrap();
///
/// let dates: Vec<NaiveDate> = covered_dates(&since, &until).collect();
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 9, 20).unwrap());
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 9, 22).unwrap());
/// ```
pub fn covered_dates(
    since: &DateTime<FixedOffset>,
    until: &DateTime<FixedOffset>,
) -> impl Iterator<Item = NaiveDate> {
    let end_date = until.date_naive();
    since
        .date_naive()
        .iter_days()
        .take_while(move |date| *date < end_date)
}

/// Classifies every date covered by `[since, until)` into its bucket.
///
/// Runs in constant time: every run of seven consecutive dates holds four
/// weekday and three weekend dates, so only the trailing partial week (at
/// most six dates) is classified one by one. The result always equals
/// classifying each date of [`covered_dates`].
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::{classify_days, DayCounts};
/// use chrono::DateTime;
///
/// let since = DateTime::parse_from_rfc3339("2024-08-01T00:00:00+01:00").unwrap();
/// let until = DateTime::parse_from_rfc3339("2024-08-12T10:00:00+01:00").unwrap();
/// assert_eq!(classify_days(&since, &until), DayCounts { weekday: 5, weekend: 6 });
/// ```
pub fn classify_days(since: &DateTime<FixedOffset>, until: &DateTime<FixedOffset>) -> DayCounts {
    let start_date = since.date_naive();
    let span = (until.date_naive() - start_date).num_days();
    if span <= 0 {
        return DayCounts::default();
    }

    // span is positive and bounded by chrono's date range
    let span = span.unsigned_abs();
    let weeks = span / 7;
    let mut counts = DayCounts {
        weekday: weeks * 4,
        weekend: weeks * 3,
    };

    // The weekday pattern repeats every seven dates, so the leftover dates
    // classify the same as the first few dates of the range.
    for date in start_date.iter_days().take((span % 7) as usize) {
        counts.record(get_day_bucket(date));
    }
    counts
}
