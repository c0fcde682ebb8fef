//! HTTP request handlers for the on-call payment API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{extract_covered_persons, get_auditable_on_call_payment_records};
use crate::config::PaymentRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, PaymentSummary, Schedule};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a rendered schedule and returns the on-call payments for everyone
/// on it.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let rates = match request.effective_rates(state.config().rates()) {
        Ok(rates) => rates,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected rate overrides"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let result = match perform_calculation(&request.schedule, &rates) {
        Ok(result) => result,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };
    info!(
        correlation_id = %correlation_id,
        schedule = %result.schedule_name,
        persons = result.payments.len(),
        total_compensation = %result.total_compensation,
        duration_us = result.duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Computes the payments for everyone on a schedule.
fn perform_calculation(schedule: &Schedule, rates: &PaymentRates) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();

    let persons = extract_covered_persons(&schedule.final_schedule);
    let records = get_auditable_on_call_payment_records(&persons, rates)?;

    let payments: Vec<PaymentSummary> = records.values().map(|record| record.summary()).collect();
    let total_compensation = payments
        .iter()
        .try_fold(Decimal::ZERO, |total, payment| {
            total.checked_add(payment.total_compensation)
        })
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("total compensation across {} persons overflowed", payments.len()),
        })?;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_name: schedule.name.clone(),
        schedule_url: schedule.html_url.clone(),
        rates: *rates,
        payments,
        total_compensation,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}
