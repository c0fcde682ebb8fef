//! Integration tests for the on-call payment engine.
//!
//! This test suite covers:
//! - Day classification scenarios for single coverage intervals
//! - Aggregation across a multi-person rota
//! - Grouping of rendered schedule entries
//! - The `/calculate` endpoint, including rate overrides and error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use ooh_pay::api::{AppState, create_router};
use ooh_pay::calculation::{
    calculate_on_call_payment, calculate_on_call_payments, extract_covered_persons,
    get_auditable_on_call_payment_records,
};
use ooh_pay::config::{ConfigLoader, PaymentRates};
use ooh_pay::models::{CoverageInterval, CoveredPerson, Schedule};
use ooh_pay::report::render_schedule_report;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn interval(since: &str, until: &str) -> CoverageInterval {
    CoverageInterval::parse(since, until).unwrap()
}

fn entry(start: &str, end: &str, id: &str, name: &str) -> Value {
    json!({
        "start": start,
        "end": end,
        "user": { "id": id, "summary": name }
    })
}

fn august_entries() -> Vec<Value> {
    vec![
        entry("2024-08-01T00:00:00+01:00", "2024-08-06T10:00:00+01:00", "1PF7DNAV", "YW Oncall"),
        entry("2024-08-06T10:00:00+01:00", "2024-08-15T10:00:00+01:00", "PGO3DTM", "SK Oncall"),
        entry("2024-08-15T00:00:00+01:00", "2024-08-16T10:00:00+01:00", "PINI77A", "EG Oncall"),
        entry("2024-08-16T10:00:00+01:00", "2024-08-21T10:00:00+01:00", "PGO3DTM", "SK Oncall"),
        entry("2024-08-21T10:00:00+01:00", "2024-08-28T10:00:00+01:00", "PJXZDBT", "CE Oncall"),
        entry("2024-08-28T10:00:00+01:00", "2024-09-01T00:00:00+01:00", "1PF7DNAV", "YW Oncall"),
    ]
}

fn schedule_json(entries: Vec<Value>) -> Value {
    json!({
        "name": "Platform OOH",
        "html_url": "https://example.pagerduty.com/schedules/PQRSTUV",
        "final_schedule": { "rendered_schedule_entries": entries }
    })
}

async fn post_calculate(router: Router, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn payment_for<'a>(result: &'a Value, id: &str) -> &'a Value {
    result["payments"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == id)
        .unwrap_or_else(|| panic!("No payment for {}", id))
}

fn assert_decimal_field(value: &Value, expected: &str) {
    let actual = value.as_str().unwrap();
    assert_eq!(
        decimal(actual).normalize(),
        decimal(expected).normalize(),
        "Expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Single interval scenarios
// =============================================================================

#[test]
fn test_single_interval_scenarios() {
    let rates = PaymentRates::default();
    let scenarios = [
        ("2024-08-01T00:00:00+01:00", "2024-08-12T10:00:00+01:00", 5, 6, "700"),
        ("2024-08-01T10:00:00+01:00", "2024-08-12T10:00:00+01:00", 5, 6, "700"),
        ("2024-09-20T16:30:00+01:00", "2024-09-20T18:30:00+01:00", 0, 0, "0"),
        ("2024-09-20T20:00:00+01:00", "2024-09-23T10:00:00+01:00", 0, 3, "225"),
        ("2024-08-28T10:00:00+01:00", "2024-08-31T23:59:59+01:00", 2, 1, "175"),
        ("2024-08-28T10:00:00+01:00", "2024-09-02T10:00:00+01:00", 2, 3, "325"),
    ];

    for (since, until, weekday, weekend, payment) in scenarios {
        let person = CoveredPerson::new("1", "John Doe", vec![interval(since, until)]);
        assert_eq!(person.intervals()[0].weekday_count(), weekday, "{since} -> {until}");
        assert_eq!(person.intervals()[0].weekend_count(), weekend, "{since} -> {until}");
        assert_eq!(
            calculate_on_call_payment(&person, &rates).unwrap(),
            decimal(payment),
            "{since} -> {until}"
        );
    }
}

// =============================================================================
// Multi-person rota
// =============================================================================

#[test]
fn test_rota_payments_from_rendered_schedule() {
    let schedule: Schedule = serde_json::from_value(schedule_json(august_entries())).unwrap();
    let persons = extract_covered_persons(&schedule.final_schedule);

    let payments = calculate_on_call_payments(&persons, &PaymentRates::default()).unwrap();
    assert_eq!(payments.len(), 4);
    assert_eq!(payments["1PF7DNAV"], decimal("575"));
    assert_eq!(payments["PGO3DTM"], decimal("850"));
    assert_eq!(payments["PINI77A"], decimal("50"));
    assert_eq!(payments["PJXZDBT"], decimal("425"));
}

#[test]
fn test_merging_separate_sources_before_aggregation() {
    let mut first_source = CoveredPerson::new(
        "1PF7DNAV",
        "YW Oncall",
        vec![interval("2024-08-01T00:00:00+01:00", "2024-08-06T10:00:00+01:00")],
    );
    let second_source = CoveredPerson::new(
        "1PF7DNAV",
        "YW Oncall",
        vec![interval("2024-08-28T10:00:00+01:00", "2024-09-01T00:00:00+01:00")],
    );

    // Unmerged, the later record replaces the earlier one.
    let unmerged = calculate_on_call_payments(
        &[first_source.clone(), second_source.clone()],
        &PaymentRates::default(),
    )
    .unwrap();
    assert_eq!(unmerged["1PF7DNAV"], decimal("250"));

    first_source.add_intervals(second_source.intervals().iter().cloned());
    let merged = calculate_on_call_payments(&[first_source], &PaymentRates::default()).unwrap();
    assert_eq!(merged["1PF7DNAV"], decimal("575"));
}

#[test]
fn test_schedule_report_lines() {
    let schedule: Schedule = serde_json::from_value(schedule_json(august_entries())).unwrap();
    let persons = extract_covered_persons(&schedule.final_schedule);
    let records =
        get_auditable_on_call_payment_records(&persons, &PaymentRates::default()).unwrap();

    let report = render_schedule_report(&schedule, &records);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Schedule name: Platform OOH",
            "Schedule URL: https://example.pagerduty.com/schedules/PQRSTUV",
            "User, TotalComp, Mon-Thu, Fri-Sun",
            "YW Oncall, 575, 4, 5",
            "SK Oncall, 850, 8, 6",
            "EG Oncall, 50, 1, 0",
            "CE Oncall, 425, 4, 3",
        ]
    );
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_calculate_rota() {
    let body = json!({ "schedule": schedule_json(august_entries()) }).to_string();
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["schedule_name"], "Platform OOH");
    assert_eq!(result["payments"].as_array().unwrap().len(), 4);

    let yw = payment_for(&result, "1PF7DNAV");
    assert_eq!(yw["name"], "YW Oncall");
    assert_eq!(yw["weekday_days"], 4);
    assert_eq!(yw["weekend_days"], 5);
    assert_decimal_field(&yw["total_compensation"], "575");

    assert_decimal_field(&payment_for(&result, "PGO3DTM")["total_compensation"], "850");
    assert_decimal_field(&payment_for(&result, "PINI77A")["total_compensation"], "50");
    assert_decimal_field(&payment_for(&result, "PJXZDBT")["total_compensation"], "425");
    assert_decimal_field(&result["total_compensation"], "1900");
}

#[tokio::test]
async fn test_calculate_with_rate_override() {
    let body = json!({
        "schedule": schedule_json(vec![entry(
            "2024-08-01T00:00:00+01:00",
            "2024-08-12T10:00:00+01:00",
            "1",
            "John Doe"
        )]),
        "rates": { "weekend_rate": "100" }
    })
    .to_string();
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["rates"]["weekday_rate"], "50");
    assert_decimal_field(&result["rates"]["weekend_rate"], "100");
    // 5 x 50 + 6 x 100
    assert_decimal_field(&result["total_compensation"], "850");
}

#[tokio::test]
async fn test_calculate_unassigned_entries_are_kept() {
    let body = json!({
        "schedule": schedule_json(vec![json!({
            "start": "2024-09-20T20:00:00+01:00",
            "end": "2024-09-23T10:00:00+01:00"
        })])
    })
    .to_string();
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let unassigned = payment_for(&result, "");
    assert_eq!(unassigned["name"], "");
    assert_decimal_field(&unassigned["total_compensation"], "225");
}

#[tokio::test]
async fn test_calculate_empty_schedule() {
    let body = json!({ "schedule": { "name": "Quiet", "final_schedule": {} } }).to_string();
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["payments"].as_array().unwrap().is_empty());
    assert_decimal_field(&result["total_compensation"], "0");
}

#[tokio::test]
async fn test_calculate_ten_thousand_year_entry() {
    // 0000-01-01 is a Saturday: 521,774 whole weeks plus Sat..Thu.
    let body = json!({
        "schedule": schedule_json(vec![entry(
            "0000-01-01T00:00:00+00:00",
            "9999-12-31T00:00:00+00:00",
            "1",
            "John Doe"
        )])
    })
    .to_string();
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let payment = payment_for(&result, "1");
    assert_eq!(payment["weekday_days"], 2_087_100);
    assert_eq!(payment["weekend_days"], 1_565_324);
    assert_decimal_field(&payment["total_compensation"], "221754300");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let (status, result) =
        post_calculate(create_router_for_test(), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_invalid_timestamp() {
    let body = json!({
        "schedule": schedule_json(vec![entry("2024-08-01", "2024-08-12T10:00:00+01:00", "1", "John Doe")])
    })
    .to_string();
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_negative_rate_override() {
    let body = json!({
        "schedule": schedule_json(august_entries()),
        "rates": { "weekday_rate": "-50" }
    })
    .to_string();
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RATES");
}

#[tokio::test]
async fn test_error_rate_override_too_large_to_pay() {
    let body = json!({
        "schedule": schedule_json(vec![entry(
            "2024-09-16T10:00:00+01:00",
            "2024-09-18T10:00:00+01:00",
            "1",
            "John Doe"
        )]),
        "rates": { "weekday_rate": "79228162514264337593543950335" }
    })
    .to_string();
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(result["code"], "CALCULATION_ERROR");
}

#[tokio::test]
async fn test_error_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .body(Body::from(json!({ "schedule": {} }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}
