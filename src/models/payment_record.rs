//! Payment record model.
//!
//! A [`PaymentRecord`] pairs a covered person with the compensation derived
//! from their coverage, so a report can show both the raw day counts and the
//! money from a single structure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CoveredPerson;

/// An auditable compensation record for one person.
///
/// The record borrows the person rather than copying it, so the weekday and
/// weekend totals read through it are the person's live totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRecord<'a> {
    /// The person the compensation was computed for.
    pub person: &'a CoveredPerson,
    /// Weekday days times the weekday rate plus weekend days times the weekend rate.
    pub total_compensation: Decimal,
}

impl PaymentRecord<'_> {
    /// Flattens the record into an owned summary line.
    pub fn summary(&self) -> PaymentSummary {
        PaymentSummary {
            id: self.person.id.clone(),
            name: self.person.name.clone(),
            total_compensation: self.total_compensation,
            weekday_days: self.person.total_weekday_days(),
            weekend_days: self.person.total_weekend_days(),
        }
    }
}

/// An owned, flattened view of a [`PaymentRecord`].
///
/// # Example
///
/// ```
/// use ooh_pay::models::PaymentSummary;
/// use rust_decimal::Decimal;
///
/// let summary = PaymentSummary {
///     id: "PINI77A".to_string(),
///     name: "EG Oncall".to_string(),
///     total_compensation: Decimal::from(50),
///     weekday_days: 1,
///     weekend_days: 0,
/// };
/// assert_eq!(summary.total_compensation, Decimal::from(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// The person's identifier.
    pub id: String,
    /// The person's display name.
    pub name: String,
    /// The compensation owed.
    pub total_compensation: Decimal,
    /// Covered Monday-Thursday dates.
    pub weekday_days: u64,
    /// Covered Friday-Sunday dates.
    pub weekend_days: u64,
}
