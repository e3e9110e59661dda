//! Error types for the Expense Approval Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during expense evaluation.
//!
//! Policy outcomes (REJECT, REVIEW) are never errors; they are normal
//! results carrying reasons. Errors are reserved for infrastructure
//! failures (unreadable or unwritable stores, bad configuration) and for
//! expense records that violate the intake contract.

use thiserror::Error;

/// The main error type for the Expense Approval Engine.
///
/// All operations in the engine return this error type, making it easy
/// to distinguish a business rejection (a normal evaluation outcome) from
/// an infrastructure failure (a store or configuration problem).
///
/// # Example
///
/// ```
/// use expense_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy configuration not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy configuration not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy configuration '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A persisted store file exists but could not be read.
    #[error("Failed to read store '{path}': {message}")]
    StoreRead {
        /// The path to the store file.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// A persisted store file contains invalid JSON.
    #[error("Failed to parse store '{path}': {message}")]
    StoreParse {
        /// The path to the store file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A persisted store file could not be written.
    #[error("Failed to write store '{path}': {message}")]
    StoreWrite {
        /// The path to the store file.
        path: String,
        /// A description of the write failure.
        message: String,
    },

    /// An expense record violated the intake contract.
    #[error("Invalid expense field '{field}': {message}")]
    InvalidExpense {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
