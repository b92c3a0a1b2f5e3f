//! Common option parameters.
//!
//! This module provides the immutable parameter bundle shared by the pricing
//! entry points, with validation at construction time.

use num_traits::Float;

use super::error::InstrumentError;

/// Immutable option parameter bundle.
///
/// Contains spot, strike, risk-free rate, volatility, and expiry with
/// validation ensuring spot, strike, volatility, and expiry are positive.
/// The rate may be negative or zero (the lookback pricer applies its own,
/// stricter rate check).
///
/// Plain value type with structural equality; copying needs no custom logic.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use kernel_models::instruments::OptionParams;
///
/// let params = OptionParams::new(100.0_f64, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert_eq!(params.spot(), 100.0);
/// assert_eq!(params.strike(), 100.0);
///
/// // Invalid volatility is rejected up front
/// assert!(OptionParams::new(100.0_f64, 100.0, 0.05, 0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams<T: Float> {
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    expiry: T,
}

impl<T: Float> OptionParams<T> {
    /// Creates new option parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised; may be negative)
    /// * `volatility` - Volatility (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    ///
    /// # Errors
    /// Returns `InstrumentError` naming the first non-positive parameter.
    pub fn new(spot: T, strike: T, rate: T, volatility: T, expiry: T) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(InstrumentError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(InstrumentError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry <= zero {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }
}
