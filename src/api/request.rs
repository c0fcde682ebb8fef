//! Request types for the on-call payment API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PaymentRates;
use crate::error::EngineResult;
use crate::models::Schedule;

/// Request body for the `/calculate` endpoint.
///
/// Carries a schedule already fetched from the scheduling service and,
/// optionally, rates that override the configured ones for this request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The rendered schedule to pay out.
    pub schedule: Schedule,
    /// Per-request rate overrides.
    #[serde(default)]
    pub rates: Option<RatesRequest>,
}

/// Rate overrides in a calculation request.
///
/// Any rate left out falls back to the configured rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesRequest {
    /// Override for the Monday-Thursday day rate.
    #[serde(default)]
    pub weekday_rate: Option<Decimal>,
    /// Override for the Friday-Sunday day rate.
    #[serde(default)]
    pub weekend_rate: Option<Decimal>,
}

impl RatesRequest {
    /// Applies the overrides on top of `configured` and validates the result.
    pub fn resolve(&self, configured: PaymentRates) -> EngineResult<PaymentRates> {
        PaymentRates::new(
            self.weekday_rate.unwrap_or(configured.weekday_rate),
            self.weekend_rate.unwrap_or(configured.weekend_rate),
        )
    }
}

impl CalculationRequest {
    /// The rates this request should be calculated with.
    pub fn effective_rates(&self, configured: PaymentRates) -> EngineResult<PaymentRates> {
        match &self.rates {
            Some(overrides) => overrides.resolve(configured),
            None => Ok(configured),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "schedule": {
                "name": "Platform OOH",
                "html_url": "https://example.pagerduty.com/schedules/PQRSTUV",
                "final_schedule": {
                    "rendered_schedule_entries": [
                        {
                            "start": "2024-08-15T00:00:00+01:00",
                            "end": "2024-08-16T10:00:00+01:00",
                            "user": { "id": "PINI77A", "summary": "EG Oncall" }
                        }
                    ]
                }
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.schedule.name, "Platform OOH");
        assert_eq!(request.schedule.final_schedule.entries().len(), 1);
        assert!(request.rates.is_none());
    }

    #[test]
    fn test_effective_rates_without_overrides() {
        let request = CalculationRequest {
            schedule: serde_json::from_str(r#"{ "name": "Empty" }"#).unwrap(),
            rates: None,
        };
        assert_eq!(
            request.effective_rates(PaymentRates::default()).unwrap(),
            PaymentRates::default()
        );
    }

    #[test]
    fn test_partial_override_keeps_configured_rate() {
        let overrides = RatesRequest {
            weekday_rate: None,
            weekend_rate: Some(Decimal::from(100)),
        };
        let rates = overrides.resolve(PaymentRates::default()).unwrap();
        assert_eq!(rates.weekday_rate, Decimal::from(50));
        assert_eq!(rates.weekend_rate, Decimal::from(100));
    }

    #[test]
    fn test_negative_override_is_rejected() {
        let overrides = RatesRequest {
            weekday_rate: Some(Decimal::from(-10)),
            weekend_rate: None,
        };
        assert!(matches!(
            overrides.resolve(PaymentRates::default()),
            Err(EngineError::InvalidRates { .. })
        ));
    }
}
