//! Plain-text rendering of payment records.
//!
//! The report is one comma-separated line per person (name, total, Mon-Thu
//! days, Fri-Sun days) under a fixed header, in person id order.
//!
//! Writing to a `String` cannot fail, so the `fmt::Result` of each `writeln!`
//! is discarded.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::models::{PaymentRecord, Schedule};

/// Header line of every payment report.
pub const REPORT_HEADER: &str = "User, TotalComp, Mon-Thu, Fri-Sun";

/// Renders the header and one line per record.
///
/// Lines follow the key order of `records`, which is person id order. They do
/// not follow the order in which people first appear on a schedule; a rota
/// whose first shift belongs to `PJXZDBT` still lists `1PF7DNAV` first.
///
/// # Example
///
/// ```
/// use ooh_pay::calculation::get_auditable_on_call_payment_records;
/// use ooh_pay::config::PaymentRates;
/// use ooh_pay::models::{CoverageInterval, CoveredPerson};
/// use ooh_pay::report::render_payment_report;
///
/// let persons = vec![
///     CoveredPerson::new("PINI77A", "EG Oncall", vec![
///         CoverageInterval::parse("2024-08-15T00:00:00+01:00", "2024-08-16T10:00:00+01:00")?,
///     ]),
/// ];
/// let records = get_auditable_on_call_payment_records(&persons, &PaymentRates::default())?;
/// assert_eq!(
///     render_payment_report(&records),
///     "User, TotalComp, Mon-Thu, Fri-Sun\nEG Oncall, 50, 1, 0\n"
/// );
/// # Ok::<(), ooh_pay::error::EngineError>(())
/// ```
pub fn render_payment_report(records: &BTreeMap<String, PaymentRecord<'_>>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", REPORT_HEADER);
    for record in records.values() {
        let _ = writeln!(
            out,
            "{}, {}, {}, {}",
            record.person.name,
            record.total_compensation,
            record.person.total_weekday_days(),
            record.person.total_weekend_days()
        );
    }
    out
}

/// Renders the schedule's name and link followed by the payment report.
pub fn render_schedule_report(
    schedule: &Schedule,
    records: &BTreeMap<String, PaymentRecord<'_>>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Schedule name: {}", schedule.name);
    let _ = writeln!(out, "Schedule URL: {}", schedule.html_url);
    out.push_str(&render_payment_report(records));
    out
}
