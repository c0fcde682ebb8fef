//! Calculation result model.
//!
//! The [`CalculationResult`] is the document returned for one schedule: the
//! rates applied, one summary per covered person, and the grand total.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PaymentSummary;
use crate::config::PaymentRates;

/// The complete result of an on-call payment calculation for a schedule.
///
/// # Example
///
/// ```
/// use ooh_pay::config::PaymentRates;
/// use ooh_pay::models::CalculationResult;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     schedule_name: "Platform OOH".to_string(),
///     schedule_url: String::new(),
///     rates: PaymentRates::default(),
///     payments: vec![],
///     total_compensation: Decimal::ZERO,
///     duration_us: 0,
/// };
/// assert!(result.payments.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Name of the schedule the payments were computed for.
    pub schedule_name: String,
    /// Link to the schedule.
    pub schedule_url: String,
    /// The rates applied.
    pub rates: PaymentRates,
    /// One summary per covered person, ordered by person id.
    pub payments: Vec<PaymentSummary>,
    /// Sum of every person's compensation.
    pub total_compensation: Decimal,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

impl CalculationResult {
    /// Looks up the summary for a person id.
    pub fn payment_for(&self, person_id: &str) -> Option<&PaymentSummary> {
        self.payments.iter().find(|summary| summary.id == person_id)
    }
}
