//! Performance benchmarks for the on-call payment engine.
//!
//! Covers the pure aggregation path (grouping, classification and payment
//! records for rotas of increasing size) and a full `/calculate` round trip.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use ooh_pay::api::{AppState, create_router};
use ooh_pay::calculation::{extract_covered_persons, get_auditable_on_call_payment_records};
use ooh_pay::config::{ConfigLoader, PaymentRates};
use ooh_pay::models::Schedule;

use axum::{body::Body, http::Request};
use chrono::{DateTime, Duration, FixedOffset};
use tower::ServiceExt;

/// Builds a schedule where `people` users take turns covering week-long shifts.
fn create_schedule(people: usize, weeks: usize) -> Schedule {
    let start: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339("2024-01-01T10:00:00+01:00").unwrap();

    let entries: Vec<serde_json::Value> = (0..weeks)
        .map(|week| {
            let user = week % people;
            let since = start + Duration::weeks(week as i64);
            let until = since + Duration::weeks(1);
            serde_json::json!({
                "start": since.to_rfc3339(),
                "end": until.to_rfc3339(),
                "user": { "id": format!("P{:04}", user), "summary": format!("User {}", user) }
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "name": "Benchmark rota",
        "html_url": "https://example.pagerduty.com/schedules/BENCH",
        "final_schedule": { "rendered_schedule_entries": entries }
    }))
    .expect("Failed to create schedule")
}

/// Benchmark: grouping and audit records for growing rotas.
fn bench_audit_records(c: &mut Criterion) {
    let rates = PaymentRates::default();
    let mut group = c.benchmark_group("audit_records");

    for weeks in [4usize, 52, 520] {
        let schedule = create_schedule(8, weeks);
        group.throughput(Throughput::Elements(weeks as u64));
        group.bench_with_input(BenchmarkId::from_parameter(weeks), &schedule, |b, schedule| {
            b.iter(|| {
                let persons = extract_covered_persons(&schedule.final_schedule);
                let records = get_auditable_on_call_payment_records(&persons, &rates)
                    .expect("Benchmark rates cannot overflow");
                black_box(records.len())
            })
        });
    }

    group.finish();
}

/// Benchmark: a one-year rota through the HTTP endpoint.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({ "schedule": create_schedule(8, 52) }).to_string();

    c.bench_function("calculate_endpoint_52_weeks", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_audit_records, bench_calculate_endpoint);
criterion_main!(benches);
