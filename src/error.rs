//! Error types for the rating library
//!
//! The computation path never fails: invalid numeric configuration
//! propagates through IEEE-754 semantics instead of raising. These types
//! exist for the opt-in configuration validation surface only.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Errors reported when validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum EloError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
