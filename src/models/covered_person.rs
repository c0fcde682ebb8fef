//! Covered person model.
//!
//! A [`CoveredPerson`] owns every coverage interval recorded for one identity
//! and sums their day counts.

use serde::{Deserialize, Serialize};

use super::CoverageInterval;
use crate::calculation::DayCounts;

/// A person on the rota together with all of their coverage intervals.
///
/// Intervals are kept in arrival order. Duplicates and overlaps are kept as
/// given, so a date covered by two overlapping intervals is counted twice.
///
/// # Example
///
/// ```
/// use ooh_pay::models::{CoverageInterval, CoveredPerson};
///
/// let mut person = CoveredPerson::new("PINI77A", "EG Oncall", vec![
///     CoverageInterval::parse("2024-08-15T00:00:00+01:00", "2024-08-16T10:00:00+01:00")?,
/// ]);
/// assert_eq!(person.total_weekday_days(), 1);
///
/// person.add_intervals(vec![
///     CoverageInterval::parse("2024-08-16T10:00:00+01:00", "2024-08-19T10:00:00+01:00")?,
/// ]);
/// assert_eq!(person.total_weekend_days(), 3);
/// # Ok::<(), ooh_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveredPerson {
    /// Opaque identifier; the aggregation key.
    pub id: String,
    /// Display label used in reports.
    pub name: String,
    #[serde(default)]
    intervals: Vec<CoverageInterval>,
}

impl CoveredPerson {
    /// Creates a person with an initial (possibly empty) set of intervals.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        intervals: impl IntoIterator<Item = CoverageInterval>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            intervals: intervals.into_iter().collect(),
        }
    }

    /// Appends intervals after the existing ones, without merging.
    pub fn add_intervals(&mut self, intervals: impl IntoIterator<Item = CoverageInterval>) {
        self.intervals.extend(intervals);
    }

    /// The intervals in arrival order.
    pub fn intervals(&self) -> &[CoverageInterval] {
        &self.intervals
    }

    /// Sum of the weekday counts of every interval.
    pub fn total_weekday_days(&self) -> u64 {
        self.intervals.iter().map(CoverageInterval::weekday_count).sum()
    }

    /// Sum of the weekend counts of every interval.
    pub fn total_weekend_days(&self) -> u64 {
        self.intervals.iter().map(CoverageInterval::weekend_count).sum()
    }

    /// Both totals together.
    pub fn day_counts(&self) -> DayCounts {
        self.intervals.iter().map(CoverageInterval::day_counts).sum()
    }
}
