//! Validation utilities for Savora data structures
//!
//! Provides range validators for the numeric domains used across the
//! platform: taste axes and emotional responses live on a 0-10 scale,
//! similarity scores and weights on a 0-1 scale.

use crate::error::SavoraError;

/// Validate a taste axis score is within the 0.0 to 10.0 domain
///
/// Rejects NaN along with out-of-range values.
///
/// # Examples
///
/// ```
/// use savora_core::validation::validate_axis_score;
///
/// assert!(validate_axis_score(7.5, "umami").is_ok());
/// assert!(validate_axis_score(0.0, "sweet").is_ok());
/// assert!(validate_axis_score(10.0, "spicy").is_ok());
/// assert!(validate_axis_score(15.0, "sweet").is_err());
/// assert!(validate_axis_score(-1.0, "cold").is_err());
/// assert!(validate_axis_score(f32::NAN, "salty").is_err());
/// ```
pub fn validate_axis_score(value: f32, axis: &str) -> Result<(), SavoraError> {
    if (0.0..=10.0).contains(&value) {
        Ok(())
    } else {
        Err(SavoraError::invalid_vector_axis(
            format!("Axis '{}' must be between 0.0 and 10.0, got {}", axis, value),
            axis,
        ))
    }
}

/// Validate an emotional response score is within the 0.0 to 10.0 domain
///
/// # Examples
///
/// ```
/// use savora_core::validation::validate_response_score;
///
/// assert!(validate_response_score(8.0, "satisfaction").is_ok());
/// assert!(validate_response_score(11.0, "surprise").is_err());
/// ```
pub fn validate_response_score(value: f32, field: &str) -> Result<(), SavoraError> {
    if (0.0..=10.0).contains(&value) {
        Ok(())
    } else {
        Err(SavoraError::invalid_response_field(
            format!(
                "Field '{}' must be between 0.0 and 10.0, got {}",
                field, value
            ),
            field,
        ))
    }
}

/// Validate a score is within the 0.0 to 1.0 range
///
/// # Examples
///
/// ```
/// use savora_core::validation::validate_unit_interval;
///
/// assert!(validate_unit_interval(0.7, "diversity_lambda").is_ok());
/// assert!(validate_unit_interval(1.0, "diversity_lambda").is_ok());
/// assert!(validate_unit_interval(1.1, "diversity_lambda").is_err());
/// assert!(validate_unit_interval(-0.1, "diversity_lambda").is_err());
/// ```
pub fn validate_unit_interval(value: f32, field: &str) -> Result<(), SavoraError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SavoraError::validation_field(
            format!(
                "Field '{}' must be between 0.0 and 1.0, got {}",
                field, value
            ),
            field,
        ))
    }
}

/// Validate a tuning parameter is finite and non-negative
///
/// # Examples
///
/// ```
/// use savora_core::validation::validate_tuning_parameter;
///
/// assert!(validate_tuning_parameter(0.1, "learning_rate").is_ok());
/// assert!(validate_tuning_parameter(0.0, "novelty_weight").is_ok());
/// assert!(validate_tuning_parameter(-0.5, "learning_rate").is_err());
/// assert!(validate_tuning_parameter(f32::NAN, "confidence_weight").is_err());
/// assert!(validate_tuning_parameter(f32::INFINITY, "learning_rate").is_err());
/// ```
pub fn validate_tuning_parameter(value: f32, parameter: &str) -> Result<(), SavoraError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SavoraError::invalid_parameter(
            format!("Must be finite and non-negative, got {}", value),
            parameter,
        ))
    }
}

/// Validate a collection is not empty
pub fn validate_not_empty<T>(items: &[T], field: &str) -> Result<(), SavoraError> {
    if items.is_empty() {
        Err(SavoraError::validation_field(
            format!("Field '{}' must not be empty", field),
            field,
        ))
    } else {
        Ok(())
    }
}
