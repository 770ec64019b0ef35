//! Shared error types for scoring operations

use thiserror::Error;

/// Main error type for riskmap scoring operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Catalog or engine configuration is unusable for scoring
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Aggregation attempted over zero score results
    #[error("cannot aggregate an empty set of score results")]
    EmptyInput,
}

impl ScoreError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ScoreError>;
