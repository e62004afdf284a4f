//! Error types for the HR engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while hiring, rating or
//! computing entitlements.

use thiserror::Error;

/// The main error type for the HR engine.
///
/// All fallible operations in the engine return this error type. Messages
/// are stable: API consumers match on them.
///
/// # Example
///
/// ```
/// use hr_engine::error::EngineError;
///
/// let error = EngineError::AlreadyExists {
///     matricule: "T12345".to_string(),
/// };
/// assert_eq!(error.to_string(), "employee with matricule T12345 already exists");
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

    /// An input failed validation before any state was touched.
    #[error("{message}")]
    Validation {
        /// What was wrong with the input.
        message: String,
    },

    /// A numeric argument fell outside its accepted range.
    #[error("{message}")]
    OutOfRange {
        /// Which bound was violated.
        message: String,
    },

    /// An employee with this matricule is already stored.
    #[error("employee with matricule {matricule} already exists")]
    AlreadyExists {
        /// The colliding matricule.
        matricule: String,
    },

    /// No matricule number is left for a role prefix.
    #[error("matricule range exhausted: limit of {limit} matricules reached")]
    RangeExhausted {
        /// The size of the numeric space.
        limit: u32,
    },

    /// No employee is stored under this matricule.
    #[error("employee with matricule {matricule} not found")]
    EmployeeNotFound {
        /// The matricule that was looked up.
        matricule: String,
    },

    /// The salary grid has no multiplier for a role/education pair.
    #[error("No salary multiplier for role '{role}' and education '{education}'")]
    MultiplierNotFound {
        /// The role.
        role: String,
        /// The education level.
        education: String,
    },

    /// The employee store failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for a [`EngineError::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a [`EngineError::Store`] error.
    pub fn store(message: impl Into<String>) -> Self {
        EngineError::Store {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
