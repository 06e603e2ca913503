//! HTTP request handlers for the labor cost engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, round_currency};
use crate::simulation::{
    group_by_employee, run_employee_simulation, run_fleet_simulation, summarize_fleet,
};

use super::request::{EmployeeSimulationRequest, FleetSimulationRequest};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeSimulationResponse, FleetSimulationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate/employees", post(simulate_employees_handler))
        .route("/simulate/fleet", post(simulate_fleet_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown field") {
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

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Turns an engine error into its mapped status and body.
fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Simulation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /simulate/employees.
///
/// Runs the per-employee simulator for one year and returns rounded rows plus
/// one total series per employee.
async fn simulate_employees_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeSimulationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee simulation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let year = request.year;
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match run_employee_simulation(year, &employees, state.config()) {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                year,
                employees = employees.len(),
                rows = records.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Employee simulation completed successfully"
            );

            let body = EmployeeSimulationResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                year,
                rows: records.iter().map(|r| r.display_row()).collect(),
                series: group_by_employee(&records),
            };
            json_response(StatusCode::OK, body)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /simulate/fleet.
///
/// Projects a uniform headcount over the configured horizon and returns
/// rounded rows plus horizon totals.
async fn simulate_fleet_handler(
    State(state): State<AppState>,
    payload: Result<Json<FleetSimulationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing fleet simulation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_fleet_projection(&request, &state, correlation_id) {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                headcount = request.headcount,
                rows = body.rows.len(),
                grand_total = %body.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Fleet projection completed successfully"
            );
            json_response(StatusCode::OK, body)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Runs the projection and assembles the response body.
fn perform_fleet_projection(
    request: &FleetSimulationRequest,
    state: &AppState,
    correlation_id: Uuid,
) -> EngineResult<FleetSimulationResponse> {
    let records = run_fleet_simulation(
        request.monthly_salary,
        request.headcount,
        &request.weekly_hours,
        state.config(),
    )?;
    let summary = summarize_fleet(&records)?;

    Ok(FleetSimulationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        headcount: request.headcount,
        rows: records.iter().map(|r| r.display_row()).collect(),
        category_totals: summary
            .category_totals
            .into_iter()
            .map(|(category, amount)| (category, round_currency(amount)))
            .collect(),
        grand_total: round_currency(summary.grand_total),
    })
}
