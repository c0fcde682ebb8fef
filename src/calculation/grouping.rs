//! Grouping of schedule entries into covered persons.
//!
//! A rendered schedule lists one entry per on-call stint. Grouping collects
//! the stints of each user into a single [`CoveredPerson`], keeping both the
//! order in which users first appear and the order of each user's entries.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{CoveredPerson, FinalSchedule, ScheduleEntry};

/// Groups schedule entries by user, one coverage interval per entry.
///
/// Entries without an assigned user are kept under the empty id and name.
/// A user's display name is taken from their first entry.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::group_schedule_entries;
/// use ooh_pay::models::ScheduleEntry;
///
/// let entries: Vec<ScheduleEntry> = serde_json::from_str(r#"[
///     { "start": "2024-08-01T00:00:00+01:00", "end": "2024-08-06T10:00:00+01:00",
///       "user": { "id": "1PF7DNAV", "summary": "YW Oncall" } },
///     { "start": "2024-08-06T10:00:00+01:00", "end": "2024-08-15T10:00:00+01:00",
///       "user": { "id": "PGO3DTM", "summary": "SK Oncall" } },
///     { "start": "2024-08-28T10:00:00+01:00", "end": "2024-09-01T00:00:00+01:00",
///       "user": { "id": "1PF7DNAV", "summary": "YW Oncall" } }
/// ]"#).unwrap();
///
/// let persons = group_schedule_entries(&entries);
/// assert_eq!(persons.len(), 2);
/// assert_eq!(persons[0].id, "1PF7DNAV");
/// assert_eq!(persons[0].intervals().len(), 2);
/// ```
pub fn group_schedule_entries<'a>(
    entries: impl IntoIterator<Item = &'a ScheduleEntry>,
) -> Vec<CoveredPerson> {
    let mut persons: Vec<CoveredPerson> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let (id, name) = entry
            .user
            .as_ref()
            .map(|user| (user.id.as_str(), user.summary.as_str()))
            .unwrap_or(("", ""));
        let interval = entry.coverage_interval();

        match positions.get(id) {
            Some(&index) => persons[index].add_intervals([interval]),
            None => {
                positions.insert(id.to_string(), persons.len());
                persons.push(CoveredPerson::new(id, name, [interval]));
            }
        }
    }

    debug!(persons = persons.len(), "Grouped schedule entries");
    persons
}

/// Groups the rendered entries of a schedule's final layer.
pub fn extract_covered_persons(final_schedule: &FinalSchedule) -> Vec<CoveredPerson> {
    group_schedule_entries(final_schedule.entries())
}
