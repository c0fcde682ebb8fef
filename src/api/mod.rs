//! HTTP API module for the on-call payment engine.
//!
//! This module provides the REST endpoint that pays out a rendered rota
//! schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RatesRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
