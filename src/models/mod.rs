//! Core data models for the on-call payment engine.
//!
//! This module contains the coverage, person, schedule and payment record
//! types used throughout the engine.

mod calculation_result;
mod coverage_interval;
mod covered_person;
mod payment_record;
mod schedule;

pub use calculation_result::CalculationResult;
pub use coverage_interval::CoverageInterval;
pub use covered_person::CoveredPerson;
pub use payment_record::{PaymentRecord, PaymentSummary};
pub use schedule::{FinalSchedule, Schedule, ScheduleEntry, ScheduleUser};
