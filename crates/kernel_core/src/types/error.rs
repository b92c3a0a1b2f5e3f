//! Error types for structured error handling.
//!
//! This module provides `PricingError`, the workspace-level error taxonomy.
//! Leaf crates define their own error enums and convert into `PricingError`
//! at the boundary.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid parameters (domain errors), detected before
///   any computation proceeds; never retried, never partially recovered.
/// - `NumericalOverflow`: Extreme parameter combinations produced a
///   non-finite value in `exp`/`powf`; reported instead of returning an
///   infinity masquerading as a price.
///
/// # Examples
/// ```
/// use kernel_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Computation produced a non-finite value.
    #[error("Numerical overflow: {0}")]
    NumericalOverflow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("sigma must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid input: sigma must be positive");
    }

    #[test]
    fn test_numerical_overflow_display() {
        let err = PricingError::NumericalOverflow("exp overflow in drift".to_string());
        assert_eq!(format!("{}", err), "Numerical overflow: exp overflow in drift");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("bad".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::NumericalOverflow("overflow".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
