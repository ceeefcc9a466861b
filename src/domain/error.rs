//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent naming-standard violations at the parameter level.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid format contract: {0}")]
    Contract(#[from] regex::Error),

    #[error("environment code must be a single letter: '{0}'")]
    InvalidEnvironmentCode(String),

    #[error("center code must be a one or two digit number: '{0}'")]
    InvalidCenterCode(String),
}

/// Result type for domain layer operations.
pub type DomainResult<T> = Result<T, DomainError>;
