//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for LoanTrail
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LoanTrailError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Record store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LoanTrailError {
    /// Validation error naming every missing required field.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::Validation(format!("missing required fields: {}", fields.join(", ")))
    }
}

/// Result type alias for LoanTrail operations
pub type Result<T> = std::result::Result<T, LoanTrailError>;
