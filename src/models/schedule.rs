//! Schedule models.
//!
//! These types mirror the rendered schedule documents produced by the upstream
//! scheduling service: a named schedule whose final layer lists who was on
//! call from when to when.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::CoverageInterval;

/// The person assigned to a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleUser {
    /// Opaque user identifier.
    pub id: String,
    /// Display name of the user.
    #[serde(default)]
    pub summary: String,
}

/// One rendered on-call entry.
///
/// # Example
///
/// ```
/// use ooh_pay::models::ScheduleEntry;
///
/// let entry: ScheduleEntry = serde_json::from_str(r#"{
///     "start": "2024-08-15T00:00:00+01:00",
///     "end": "2024-08-16T10:00:00+01:00",
///     "user": { "id": "PINI77A", "summary": "EG Oncall" }
/// }"#).unwrap();
/// assert_eq!(entry.coverage_interval().weekday_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// When the coverage starts.
    pub start: DateTime<FixedOffset>,
    /// When the coverage ends.
    pub end: DateTime<FixedOffset>,
    /// Who is on call, if anyone was assigned.
    #[serde(default)]
    pub user: Option<ScheduleUser>,
}

impl ScheduleEntry {
    /// The coverage interval spanned by this entry.
    pub fn coverage_interval(&self) -> CoverageInterval {
        CoverageInterval::new(self.start, self.end)
    }
}

/// The final (rendered) layer of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSchedule {
    /// Entries in the order the service returned them.
    #[serde(default)]
    pub rendered_schedule_entries: Option<Vec<ScheduleEntry>>,
}

impl FinalSchedule {
    /// The rendered entries; an absent list means no entries.
    pub fn entries(&self) -> &[ScheduleEntry] {
        self.rendered_schedule_entries.as_deref().unwrap_or_default()
    }
}

/// A rota schedule as fetched from the scheduling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The schedule's display name.
    #[serde(default)]
    pub name: String,
    /// Link to the schedule in the scheduling service.
    #[serde(default)]
    pub html_url: String,
    /// The rendered final layer.
    #[serde(default)]
    pub final_schedule: FinalSchedule,
}
