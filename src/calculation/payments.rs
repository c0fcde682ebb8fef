//! On-call payment aggregation.
//!
//! Pure functions that turn covered persons into compensation figures. Every
//! figure is `weekday days * weekday rate + weekend days * weekend rate`,
//! computed from the person's current intervals. Arithmetic is checked: a
//! figure that does not fit in a [`Decimal`] is reported as
//! [`EngineError::CalculationError`] instead of panicking.
//!
//! Results are keyed by person id. If the same id appears more than once in
//! the input, the later person replaces the earlier one in the result; callers
//! that need both should merge them first with
//! [`CoveredPerson::add_intervals`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PaymentRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{CoveredPerson, PaymentRecord};

/// Calculates the compensation owed to one person.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::calculate_on_call_payment;
/// use ooh_pay::config::PaymentRates;
/// use ooh_pay::models::{CoverageInterval, CoveredPerson};
/// use rust_decimal::Decimal;
///
/// let person = CoveredPerson::new("1", "John Doe", vec![
///     CoverageInterval::parse("2024-08-01T00:00:00+01:00", "2024-08-12T10:00:00+01:00")?,
/// ]);
/// // 5 weekday days x 50 + 6 weekend days x 75
/// assert_eq!(calculate_on_call_payment(&person, &PaymentRates::default())?, Decimal::from(700));
/// # Ok::<(), ooh_pay::error::EngineError>(())
/// ```
pub fn calculate_on_call_payment(
    person: &CoveredPerson,
    rates: &PaymentRates,
) -> EngineResult<Decimal> {
    let counts = person.day_counts();
    let payment = Decimal::from(counts.weekday)
        .checked_mul(rates.weekday_rate)
        .zip(Decimal::from(counts.weekend).checked_mul(rates.weekend_rate))
        .and_then(|(weekday_pay, weekend_pay)| weekday_pay.checked_add(weekend_pay))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "payment for '{}' overflowed ({} weekday days at {}, {} weekend days at {})",
                person.id, counts.weekday, rates.weekday_rate, counts.weekend, rates.weekend_rate
            ),
        })?;

    debug!(
        person_id = %person.id,
        weekday_days = counts.weekday,
        weekend_days = counts.weekend,
        payment = %payment,
        "Calculated on-call payment"
    );

    Ok(payment)
}

/// Calculates the compensation for every person, keyed by person id.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::calculate_on_call_payments;
/// use ooh_pay::config::PaymentRates;
/// use ooh_pay::models::{CoverageInterval, CoveredPerson};
/// use rust_decimal::Decimal;
///
/// let persons = vec![
///     CoveredPerson::new("PINI77A", "EG Oncall", vec![
///         CoverageInterval::parse("2024-08-15T00:00:00+01:00", "2024-08-16T10:00:00+01:00")?,
///     ]),
/// ];
/// let payments = calculate_on_call_payments(&persons, &PaymentRates::default())?;
/// assert_eq!(payments["PINI77A"], Decimal::from(50));
/// # Ok::<(), ooh_pay::error::EngineError>(())
/// ```
pub fn calculate_on_call_payments(
    persons: &[CoveredPerson],
    rates: &PaymentRates,
) -> EngineResult<BTreeMap<String, Decimal>> {
    let mut payments = BTreeMap::new();
    for person in persons {
        let payment = calculate_on_call_payment(person, rates)?;
        if payments.insert(person.id.clone(), payment).is_some() {
            warn_overwritten(person);
        }
    }
    Ok(payments)
}

/// Builds an auditable record for every person, keyed by person id.
///
/// Each record borrows its person, so the day counts behind the total can be
/// read straight off the record.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::get_auditable_on_call_payment_records;
/// use ooh_pay::config::PaymentRates;
/// use ooh_pay::models::{CoverageInterval, CoveredPerson};
/// use rust_decimal::Decimal;
///
/// let persons = vec![
///     CoveredPerson::new("PJXZDBT", "CE Oncall", vec![
///         CoverageInterval::parse("2024-08-21T10:00:00+01:00", "2024-08-28T10:00:00+01:00")?,
///     ]),
/// ];
/// let records = get_auditable_on_call_payment_records(&persons, &PaymentRates::default())?;
/// let record = &records["PJXZDBT"];
/// assert_eq!(record.person.total_weekday_days(), 4);
/// assert_eq!(record.person.total_weekend_days(), 3);
/// assert_eq!(record.total_compensation, Decimal::from(425));
/// # Ok::<(), ooh_pay::error::EngineError>(())
/// ```
pub fn get_auditable_on_call_payment_records<'a>(
    persons: &'a [CoveredPerson],
    rates: &PaymentRates,
) -> EngineResult<BTreeMap<String, PaymentRecord<'a>>> {
    let mut records = BTreeMap::new();
    for person in persons {
        let record = PaymentRecord {
            person,
            total_compensation: calculate_on_call_payment(person, rates)?,
        };
        if records.insert(person.id.clone(), record).is_some() {
            warn_overwritten(person);
        }
    }
    Ok(records)
}

fn warn_overwritten(person: &CoveredPerson) {
    warn!(
        person_id = %person.id,
        person_name = %person.name,
        "Duplicate person id; the later entry replaces the earlier one"
    );
}
