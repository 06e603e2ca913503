//! Response types for the labor cost engine API.
//!
//! This module defines the success bodies of both simulation endpoints and
//! the error response structures for the HTTP API.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{EmployeeMonthRow, FleetMonthRow, HourCategory};
use crate::simulation::EmployeeSeries;

/// Response body of `/simulate/employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSimulationResponse {
    /// Unique identifier of this run.
    pub calculation_id: Uuid,
    /// When the run was computed.
    pub timestamp: DateTime<Utc>,
    /// The crate version that computed the run.
    pub engine_version: String,
    /// The simulated year.
    pub year: i32,
    /// Rounded rows, employee-major then by month.
    pub rows: Vec<EmployeeMonthRow>,
    /// One monthly total series per employee.
    pub series: Vec<EmployeeSeries>,
}

/// Response body of `/simulate/fleet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSimulationResponse {
    /// Unique identifier of this run.
    pub calculation_id: Uuid,
    /// When the run was computed.
    pub timestamp: DateTime<Utc>,
    /// The crate version that computed the run.
    pub engine_version: String,
    /// The projected headcount.
    pub headcount: u32,
    /// Rounded rows in chronological order.
    pub rows: Vec<FleetMonthRow>,
    /// Cost per category over the whole horizon, rounded.
    pub category_totals: BTreeMap<HourCategory, Decimal>,
    /// Cost over the whole horizon, rounded.
    pub grand_total: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::Validation { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::DivisionByZero { base_hours } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DIVISION_BY_ZERO",
                    "Base hours schedule is degenerate",
                    format!("Cannot derive an hourly rate from {} base hours", base_hours),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
