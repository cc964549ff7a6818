//! HTTP request handlers for the paycheck API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_paycheck;
use crate::error::EngineResult;
use crate::models::PaycheckResult;

use super::request::PaycheckRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/paycheck", post(paycheck_handler))
        .with_state(state)
}

/// Handler for POST /paycheck endpoint.
///
/// Accepts a rate and a week of hours and returns the calculated paycheck.
async fn paycheck_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaycheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paycheck request");

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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match perform_calculation(&request, &state) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %result.calculation_id,
                gross_pay = %result.summary.gross_pay,
                net_pay = %result.summary.net_pay,
                duration_us = result.audit_trace.duration_us,
                "Paycheck calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Paycheck calculation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

fn perform_calculation(request: &PaycheckRequest, state: &AppState) -> EngineResult<PaycheckResult> {
    let hours = request.weekly_hours()?;
    calculate_paycheck(request.pay_rate, hours, state.config().config())
}
