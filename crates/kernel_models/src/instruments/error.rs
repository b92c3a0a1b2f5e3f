//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction. All variants are domain errors: they are raised before any
//! pricing computation proceeds.

use kernel_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidSpot`: Spot price is non-positive
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidVolatility`: Volatility is non-positive
/// - `InvalidExpiry`: Expiry time is non-positive
/// - `InvalidBarriers`: Double-digital barriers are not ordered
///
/// # Examples
/// ```
/// use kernel_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid expiry time (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Double-digital barriers not strictly ordered (lower >= upper).
    #[error("Invalid barriers: lower = {lower} must be below upper = {upper}")]
    InvalidBarriers {
        /// The lower barrier value
        lower: f64,
        /// The upper barrier value
        upper: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
