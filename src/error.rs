//! Error types for the labor cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while loading configuration,
//! validating a simulation snapshot, or computing costs.

use thiserror::Error;

/// The main error type for the labor cost engine.
///
/// All fallible operations in the engine return this error type, so callers
/// can handle configuration, validation and arithmetic failures uniformly.
///
/// # Example
///
/// ```
/// use labor_cost_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "headcount".to_string(),
///     message: "must be at least 1".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'headcount': must be at least 1");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input value was rejected at the boundary, before any cost was computed.
    #[error("Invalid input '{field}': {message}")]
    Validation {
        /// Dotted path of the offending field (e.g. `employees[0].monthly_salary`).
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A monthly salary was divided by zero base hours.
    #[error("Cannot derive an hourly rate from {base_hours} base hours")]
    DivisionByZero {
        /// The base hours that were resolved for the month.
        base_hours: u32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
