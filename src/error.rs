// src/error.rs

use thiserror::Error;

/// Errors raised by the volatility calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VolatilityError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl VolatilityError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        VolatilityError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, VolatilityError>;
