//! Error types for the Monte Carlo pricing engine.
//!
//! This module defines structured error types for configuration validation
//! and runtime errors in the simulation engine.

use std::fmt;

use kernel_core::types::PricingError;

/// Monte Carlo engine error.
///
/// Configuration variants occur during construction; `NumericalOverflow`
/// occurs at runtime when the simulation produces a non-finite value.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
    /// Simulation produced a non-finite value.
    NumericalOverflow {
        /// Where the overflow occurred.
        context: &'static str,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
            Self::NumericalOverflow { context } => {
                write!(f, "Numerical overflow in {}", context)
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<EngineError> for PricingError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NumericalOverflow { .. } => {
                PricingError::NumericalOverflow(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
