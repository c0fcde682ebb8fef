//! Error types for the on-call payment engine.
//!
//! These errors cover loading rate configuration, parsing raw timestamp
//! strings, and compensation figures too large for a decimal.

use thiserror::Error;

/// The main error type for the on-call payment engine.
///
/// # Example
///
/// ```
/// use ooh_pay::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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

    /// A configured or requested day rate is unusable.
    #[error("Invalid payment rates: {message}")]
    InvalidRates {
        /// A description of what made the rates invalid.
        message: String,
    },

    /// A coverage endpoint was not an RFC 3339 timestamp with an offset.
    #[error("Invalid timestamp for '{field}': {value}")]
    InvalidTimestamp {
        /// Which endpoint failed (`since` or `until`).
        field: String,
        /// The offending input.
        value: String,
    },

    /// A compensation figure could not be represented.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
