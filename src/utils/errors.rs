use thiserror::Error;

/// Failure of a single design computation.
///
/// Every variant is terminal: the calculators are pure, so retrying with the
/// same inputs yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Regulatory violation: {0}")]
    RegulatoryViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type DesignResult<T> = Result<T, DesignError>;

/// Rejects non-finite and non-positive physical parameters.
pub fn require_positive(name: &str, value: f64) -> DesignResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DesignError::InvalidInput(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}
