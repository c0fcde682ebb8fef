//! Configuration types for on-call payments.
//!
//! This module contains the strongly-typed rate configuration deserialized
//! from YAML configuration files and accepted as request overrides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default compensation per covered Monday-Thursday date.
pub const WEEKDAY_RATE: u32 = 50;

/// Default compensation per covered Friday-Sunday date.
pub const WEEKEND_RATE: u32 = 75;

/// Compensation paid per classified calendar day.
///
/// Amounts are in an unspecified currency unit.
///
/// # Example
///
/// ```
/// use ooh_pay::config::PaymentRates;
/// use rust_decimal::Decimal;
///
/// let rates = PaymentRates::default();
/// assert_eq!(rates.weekday_rate, Decimal::from(50));
/// assert_eq!(rates.weekend_rate, Decimal::from(75));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRates {
    /// Paid for each covered Monday-Thursday date.
    pub weekday_rate: Decimal,
    /// Paid for each covered Friday-Sunday date.
    pub weekend_rate: Decimal,
}

impl Default for PaymentRates {
    fn default() -> Self {
        Self {
            weekday_rate: Decimal::from(WEEKDAY_RATE),
            weekend_rate: Decimal::from(WEEKEND_RATE),
        }
    }
}

impl PaymentRates {
    /// Creates rates, rejecting negative amounts.
    pub fn new(weekday_rate: Decimal, weekend_rate: Decimal) -> EngineResult<Self> {
        let rates = Self {
            weekday_rate,
            weekend_rate,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Checks that neither rate is negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("weekday_rate", self.weekday_rate),
            ("weekend_rate", self.weekend_rate),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::InvalidRates {
                    message: format!("{} must not be negative, got {}", field, value),
                });
            }
        }
        Ok(())
    }
}
