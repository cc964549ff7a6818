//! Error types for the paycheck engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a paycheck.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::DayOfWeek;

/// The main error type for the paycheck engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use ca_paycheck::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
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

    /// A configuration value was present but unusable.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A tax bracket table failed validation.
    ///
    /// This is a load-time error; a validated table never produces it.
    #[error("Malformed bracket table '{table}': {message}")]
    MalformedBracketTable {
        /// The name of the offending table.
        table: String,
        /// A description of the defect.
        message: String,
    },

    /// The hourly pay rate was non-positive or below the minimum wage floor.
    #[error("Invalid pay rate {rate}: must be positive and at least the minimum wage of {floor}")]
    InvalidRate {
        /// The rejected rate.
        rate: Decimal,
        /// The configured minimum wage floor.
        floor: Decimal,
    },

    /// The hourly pay rate exceeded the largest rate the engine computes with.
    #[error("Invalid pay rate {rate}: must not exceed {ceiling}")]
    RateAboveCeiling {
        /// The rejected rate.
        rate: Decimal,
        /// The largest accepted rate.
        ceiling: Decimal,
    },

    /// Hours worked for a day fell outside the allowed range.
    #[error("Invalid hours {hours} on {day}: must be between 0 and {max}")]
    InvalidHours {
        /// The day the hours were reported for.
        day: DayOfWeek,
        /// The rejected hours value.
        hours: Decimal,
        /// The maximum hours allowed in a day.
        max: Decimal,
    },

    /// The weekly timesheet did not contain the seven weekdays in order.
    #[error("Invalid timesheet: {message}")]
    InvalidTimesheet {
        /// A description of what made the timesheet invalid.
        message: String,
    },

    /// A ratio was requested with a zero denominator.
    #[error("Division by zero while computing {operation}")]
    DivisionByZero {
        /// The quantity that could not be computed.
        operation: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
