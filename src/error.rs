//! Error types for the pay calculation engine.
//!
//! The calculator itself is total and never fails. Errors only come from
//! loading configuration and from editing a [`SalaryState`](crate::models::SalaryState)
//! with an id it does not contain.

use thiserror::Error;

/// The main error type for the pay calculation engine.
///
/// # Example
///
/// ```
/// use teacher_pay::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
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

    /// A rate table supplied through configuration does not cover every key.
    #[error("Rate table '{table}' is incomplete: missing {missing}")]
    IncompleteRateTable {
        /// The name of the table (e.g. "personal_rates").
        table: String,
        /// The first missing key, formatted as `level/column`.
        missing: String,
    },

    /// No group class with the given id exists in the salary state.
    #[error("Group class not found: {id}")]
    GroupClassNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No trial-success record with the given id exists in the salary state.
    #[error("Trial success record not found: {id}")]
    TrialRecordNotFound {
        /// The id that was looked up.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
