//! Error types for the Savora platform
//!
//! All palate-engine errors are raised at the boundary of a public function
//! (construction, validation, configuration) and propagated to the caller.
//! The core performs no I/O, so there is no retry machinery here.

use thiserror::Error;

/// Platform-wide error type
#[derive(Debug, Error)]
pub enum SavoraError {
    /// A taste vector is missing an axis or carries an axis value outside [0, 10]
    #[error("Invalid taste vector: {message}")]
    InvalidVector {
        message: String,
        axis: Option<String>,
    },

    /// An emotional response carries a field value outside [0, 10]
    #[error("Invalid emotional response: {message}")]
    InvalidResponse {
        message: String,
        field: Option<String>,
    },

    /// A tuning parameter is negative, NaN, or infinite
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { message: String, parameter: String },

    /// General boundary validation failure (raw payloads, empty inputs)
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Configuration loading or validation failure
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SavoraError {
    /// Create an invalid-vector error without an axis label
    pub fn invalid_vector(message: impl Into<String>) -> Self {
        Self::InvalidVector {
            message: message.into(),
            axis: None,
        }
    }

    /// Create an invalid-vector error for a specific axis
    pub fn invalid_vector_axis(message: impl Into<String>, axis: impl Into<String>) -> Self {
        Self::InvalidVector {
            message: message.into(),
            axis: Some(axis.into()),
        }
    }

    /// Create an invalid-response error for a specific field
    pub fn invalid_response_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(message: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a general validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error for a specific field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
