//! Calculation logic for the on-call payment engine.
//!
//! This module contains day classification for coverage intervals, grouping
//! of schedule entries into covered persons, and payment aggregation over
//! those persons.

mod day_classification;
mod grouping;
mod payments;

pub use day_classification::{DayBucket, DayCounts, classify_days, covered_dates, get_day_bucket};
pub use grouping::{extract_covered_persons, group_schedule_entries};
pub use payments::{
    calculate_on_call_payment, calculate_on_call_payments, get_auditable_on_call_payment_records,
};
