//! Error types for analytical pricing operations.

use kernel_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Provides structured error handling for closed-form pricing with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidExpiry`: Non-positive expiry
/// - `InvalidBarriers`: Double-digital barriers not ordered
/// - `InvalidExtremum`: Non-positive running minimum/maximum (lookback)
/// - `ZeroRate`: Zero risk-free rate (the lookback closed forms divide by r)
/// - `Overflow`: Formula produced a non-finite value
///
/// # Examples
/// ```
/// use kernel_models::analytical::AnalyticError;
///
/// let err = AnalyticError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticError {
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

    /// Invalid running extremum for a lookback price (non-positive).
    #[error("Invalid running extremum: H = {extremum}")]
    InvalidExtremum {
        /// The invalid extremum value
        extremum: f64,
    },

    /// Zero risk-free rate: the lookback closed forms are undefined at r = 0.
    #[error("Lookback formulas are undefined for r = 0")]
    ZeroRate,

    /// Formula produced a non-finite value.
    #[error("Numerical overflow in {context}")]
    Overflow {
        /// Where the overflow occurred
        context: &'static str,
    },
}

impl From<AnalyticError> for PricingError {
    fn from(err: AnalyticError) -> Self {
        match err {
            AnalyticError::Overflow { .. } => PricingError::NumericalOverflow(err.to_string()),
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
