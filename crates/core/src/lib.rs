//! # Savora Core
//!
//! Shared building blocks for the Savora food-journaling platform.
//!
//! This crate provides the error taxonomy, numeric validation, raw vector
//! math, configuration loading, and logging initialization used by the
//! palate personalization engine and any service embedding it.
//!
//! ## Modules
//!
//! - `error`: Error types and handling
//! - `validation`: Range validators for taste and response scores
//! - `math`: Raw-slice vector operations
//! - `config`: Configuration loading from the environment
//! - `observability`: Structured logging initialization

pub mod config;
pub mod error;
pub mod math;
pub mod observability;
pub mod validation;

// Re-export commonly used items
pub use config::{load_dotenv, ConfigLoader};
pub use error::SavoraError;
pub use math::{cosine_similarity, dot_product, l2_distance, l2_norm, normalize_vector};
pub use observability::{init_logging, try_init_logging, LogConfig, LogFormat, ObservabilityError};
pub use validation::{
    validate_axis_score, validate_not_empty, validate_response_score, validate_tuning_parameter,
    validate_unit_interval,
};

/// Result type alias for Savora operations
pub type Result<T> = std::result::Result<T, SavoraError>;
