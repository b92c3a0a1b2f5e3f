//! Payoff definitions over a closed variant set.
//!
//! This module provides the `Payoff` enum: a pure function of the terminal
//! spot price, carrying the strike(s) it needs and nothing else.

use num_traits::Float;

use super::error::InstrumentError;

/// Option payoff as a closed tagged union.
///
/// Each variant is immutable after construction and `evaluate` is a pure
/// function of spot with no internal state. The variant set is fixed, so
/// dispatch is a `match` rather than a virtual call.
///
/// # Boundary conventions
///
/// Digital boundaries are a classic source of off-by-one bugs, so the
/// conventions are fixed here once:
/// - `DigitalCall`: pays 1 iff spot > strike (strict; the boundary pays 0)
/// - `DigitalPut`: pays 1 iff spot < strike (strict; the boundary pays 0)
/// - `DoubleDigital`: pays 1 iff lower <= spot <= upper (inclusive band)
///
/// # Examples
/// ```
/// use kernel_models::instruments::Payoff;
///
/// let call = Payoff::call(100.0_f64).unwrap();
/// assert_eq!(call.evaluate(110.0), 10.0);
/// assert_eq!(call.evaluate(90.0), 0.0);
///
/// let band = Payoff::double_digital(100.0_f64, 120.0).unwrap();
/// assert_eq!(band.evaluate(110.0), 1.0);
/// assert_eq!(band.evaluate(130.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff<T: Float> {
    /// Call option: max(S - K, 0).
    Call {
        /// Strike price (K)
        strike: T,
    },
    /// Put option: max(K - S, 0).
    Put {
        /// Strike price (K)
        strike: T,
    },
    /// Digital call: 1 if S > K else 0.
    DigitalCall {
        /// Strike price (K)
        strike: T,
    },
    /// Digital put: 1 if S < K else 0.
    DigitalPut {
        /// Strike price (K)
        strike: T,
    },
    /// Double digital: 1 if lower <= S <= upper else 0.
    DoubleDigital {
        /// Lower barrier
        lower: T,
        /// Upper barrier (must exceed lower)
        upper: T,
    },
}

impl<T: Float> Payoff<T> {
    /// Creates a call payoff, rejecting a non-positive strike.
    pub fn call(strike: T) -> Result<Self, InstrumentError> {
        Self::check_strike(strike)?;
        Ok(Payoff::Call { strike })
    }

    /// Creates a put payoff, rejecting a non-positive strike.
    pub fn put(strike: T) -> Result<Self, InstrumentError> {
        Self::check_strike(strike)?;
        Ok(Payoff::Put { strike })
    }

    /// Creates a digital call payoff, rejecting a non-positive strike.
    pub fn digital_call(strike: T) -> Result<Self, InstrumentError> {
        Self::check_strike(strike)?;
        Ok(Payoff::DigitalCall { strike })
    }

    /// Creates a digital put payoff, rejecting a non-positive strike.
    pub fn digital_put(strike: T) -> Result<Self, InstrumentError> {
        Self::check_strike(strike)?;
        Ok(Payoff::DigitalPut { strike })
    }

    /// Creates a double-digital payoff.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if `lower` is non-positive
    /// - `InstrumentError::InvalidBarriers` if `lower >= upper`
    pub fn double_digital(lower: T, upper: T) -> Result<Self, InstrumentError> {
        Self::check_strike(lower)?;
        if lower >= upper {
            return Err(InstrumentError::InvalidBarriers {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Payoff::DoubleDigital { lower, upper })
    }

    fn check_strike(strike: T) -> Result<(), InstrumentError> {
        if strike <= T::zero() {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Evaluates the payoff for a terminal spot price.
    ///
    /// Call/Put results are never negative; digital results are exactly
    /// zero or one.
    #[inline]
    pub fn evaluate(&self, spot: T) -> T {
        let zero = T::zero();
        let one = T::one();
        match *self {
            Payoff::Call { strike } => (spot - strike).max(zero),
            Payoff::Put { strike } => (strike - spot).max(zero),
            Payoff::DigitalCall { strike } => {
                if spot > strike {
                    one
                } else {
                    zero
                }
            }
            Payoff::DigitalPut { strike } => {
                if spot < strike {
                    one
                } else {
                    zero
                }
            }
            Payoff::DoubleDigital { lower, upper } => {
                if spot >= lower && spot <= upper {
                    one
                } else {
                    zero
                }
            }
        }
    }

    /// Returns whether this payoff is digital (settles in {0, 1}).
    #[inline]
    pub fn is_digital(&self) -> bool {
        matches!(
            self,
            Payoff::DigitalCall { .. } | Payoff::DigitalPut { .. } | Payoff::DoubleDigital { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Call payoff tests

    #[test]
    fn test_call_in_the_money() {
        let call = Payoff::call(100.0_f64).unwrap();
        assert_relative_eq!(call.evaluate(110.0), 10.0);
    }

    #[test]
    fn test_call_out_of_the_money() {
        let call = Payoff::call(100.0_f64).unwrap();
        assert_eq!(call.evaluate(90.0), 0.0);
    }

    #[test]
    fn test_call_at_the_money() {
        let call = Payoff::call(100.0_f64).unwrap();
        assert_eq!(call.evaluate(100.0), 0.0);
    }

    #[test]
    fn test_call_non_negative_everywhere() {
        let call = Payoff::call(100.0_f64).unwrap();
        for spot in [0.01, 50.0, 99.99, 100.0, 100.01, 500.0] {
            assert!(call.evaluate(spot) >= 0.0);
        }
    }

    // Put payoff tests

    #[test]
    fn test_put_in_the_money() {
        let put = Payoff::put(100.0_f64).unwrap();
        assert_relative_eq!(put.evaluate(90.0), 10.0);
    }

    #[test]
    fn test_put_out_of_the_money() {
        let put = Payoff::put(100.0_f64).unwrap();
        assert_eq!(put.evaluate(110.0), 0.0);
    }

    #[test]
    fn test_put_non_negative_everywhere() {
        let put = Payoff::put(100.0_f64).unwrap();
        for spot in [0.01, 50.0, 99.99, 100.0, 100.01, 500.0] {
            assert!(put.evaluate(spot) >= 0.0);
        }
    }

    // Digital call tests: strict inequality, boundary pays 0

    #[test]
    fn test_digital_call_above_strike() {
        let digital = Payoff::digital_call(100.0_f64).unwrap();
        assert_eq!(digital.evaluate(110.0), 1.0);
    }

    #[test]
    fn test_digital_call_below_strike() {
        let digital = Payoff::digital_call(100.0_f64).unwrap();
        assert_eq!(digital.evaluate(90.0), 0.0);
    }

    #[test]
    fn test_digital_call_at_strike_pays_zero() {
        let digital = Payoff::digital_call(100.0_f64).unwrap();
        assert_eq!(digital.evaluate(100.0), 0.0);
    }

    // Digital put tests: strict inequality, boundary pays 0

    #[test]
    fn test_digital_put_below_strike() {
        let digital = Payoff::digital_put(100.0_f64).unwrap();
        assert_eq!(digital.evaluate(90.0), 1.0);
    }

    #[test]
    fn test_digital_put_at_strike_pays_zero() {
        let digital = Payoff::digital_put(100.0_f64).unwrap();
        assert_eq!(digital.evaluate(100.0), 0.0);
    }

    // Double digital tests: inclusive band

    #[test]
    fn test_double_digital_inside_band() {
        let band = Payoff::double_digital(100.0_f64, 120.0).unwrap();
        assert_eq!(band.evaluate(110.0), 1.0);
    }

    #[test]
    fn test_double_digital_outside_band() {
        let band = Payoff::double_digital(100.0_f64, 120.0).unwrap();
        assert_eq!(band.evaluate(90.0), 0.0);
        assert_eq!(band.evaluate(130.0), 0.0);
    }

    #[test]
    fn test_double_digital_boundaries_pay_one() {
        let band = Payoff::double_digital(100.0_f64, 120.0).unwrap();
        assert_eq!(band.evaluate(100.0), 1.0);
        assert_eq!(band.evaluate(120.0), 1.0);
    }

    #[test]
    fn test_digital_range_is_exactly_zero_or_one() {
        let payoffs = [
            Payoff::digital_call(100.0_f64).unwrap(),
            Payoff::digital_put(100.0_f64).unwrap(),
            Payoff::double_digital(100.0_f64, 120.0).unwrap(),
        ];
        for payoff in payoffs {
            for spot in [1.0, 99.0, 100.0, 110.0, 120.0, 121.0, 1000.0] {
                let value = payoff.evaluate(spot);
                assert!(value == 0.0 || value == 1.0, "digital payoff was {}", value);
            }
        }
    }

    // Constructor validation tests

    #[test]
    fn test_call_invalid_strike() {
        assert!(matches!(
            Payoff::call(-100.0_f64),
            Err(InstrumentError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_double_digital_unordered_barriers() {
        assert!(matches!(
            Payoff::double_digital(120.0_f64, 100.0),
            Err(InstrumentError::InvalidBarriers { .. })
        ));
    }

    #[test]
    fn test_double_digital_equal_barriers() {
        assert!(matches!(
            Payoff::double_digital(100.0_f64, 100.0),
            Err(InstrumentError::InvalidBarriers { .. })
        ));
    }

    #[test]
    fn test_is_digital() {
        assert!(!Payoff::call(100.0_f64).unwrap().is_digital());
        assert!(!Payoff::put(100.0_f64).unwrap().is_digital());
        assert!(Payoff::digital_call(100.0_f64).unwrap().is_digital());
        assert!(Payoff::digital_put(100.0_f64).unwrap().is_digital());
        assert!(Payoff::double_digital(100.0_f64, 120.0).unwrap().is_digital());
    }

    #[test]
    fn test_clone_and_equality() {
        let call = Payoff::call(100.0_f64).unwrap();
        let copy = call;
        assert_eq!(call, copy);
    }

    #[test]
    fn test_f32_compatibility() {
        let call = Payoff::call(100.0_f32).unwrap();
        assert!((call.evaluate(110.0_f32) - 10.0_f32).abs() < 1e-4);
    }
}
