//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form prices for vanilla and digital European
//! options under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//! **Digital Call**: e^(-rT)·N(d₂)
//! **Digital Put**: e^(-rT)·N(-d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The double digital is priced as the difference of two digital calls, so
//! its value depends only on the band's probability mass under the
//! risk-neutral terminal distribution.

use num_traits::Float;

use kernel_core::math::distributions::norm_cdf;

use super::error::AnalyticError;
use crate::instruments::{OptionParams, Payoff};

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike and expiry are
/// supplied per pricing call. Put-call parity `C - P = S - K·e^(-rT)` holds
/// to numerical rounding for every valid input because both legs share the
/// same d₁/d₂ and the CDF satisfies N(x) + N(-x) = 1 exactly.
///
/// # Examples
/// ```
/// use kernel_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised; may be negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticError::InvalidSpot` if spot <= 0
    /// - `AnalyticError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(AnalyticError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Creates a model from a validated parameter bundle.
    ///
    /// The bundle's strike and expiry are passed separately to the pricing
    /// methods; this constructor only consumes the market state.
    pub fn from_params(params: &OptionParams<T>) -> Result<Self, AnalyticError> {
        Self::new(params.spot(), params.rate(), params.volatility())
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
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

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Assumes strike and expiry are positive; the pricing methods validate
    /// before calling.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Errors
    /// - `AnalyticError::InvalidStrike` / `InvalidExpiry` on non-positive inputs
    /// - `AnalyticError::Overflow` if the result is non-finite
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticError> {
        check_strike_expiry(strike, expiry)?;

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        let price = self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2);
        ensure_finite(price, "Black-Scholes call")
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Errors
    /// Same conditions as [`price_call`](Self::price_call).
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticError> {
        check_strike_expiry(strike, expiry)?;

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        let price = strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1);
        ensure_finite(price, "Black-Scholes put")
    }

    /// Computes the digital (cash-or-nothing) call price: e^(-rT)·N(d₂).
    ///
    /// Settles 1 when the terminal spot finishes above the strike.
    pub fn price_digital_call(&self, strike: T, expiry: T) -> Result<T, AnalyticError> {
        check_strike_expiry(strike, expiry)?;

        let d2 = self.d2(strike, expiry);
        let price = (-self.rate * expiry).exp() * norm_cdf(d2);
        ensure_finite(price, "digital call")
    }

    /// Computes the digital (cash-or-nothing) put price: e^(-rT)·N(-d₂).
    pub fn price_digital_put(&self, strike: T, expiry: T) -> Result<T, AnalyticError> {
        check_strike_expiry(strike, expiry)?;

        let d2 = self.d2(strike, expiry);
        let price = (-self.rate * expiry).exp() * norm_cdf(-d2);
        ensure_finite(price, "digital put")
    }

    /// Computes the double-digital price as the difference of two digital
    /// calls struck at the band boundaries.
    ///
    /// The terminal distribution is continuous, so the strict-versus-inclusive
    /// boundary conventions of the discrete payoff carry no probability mass
    /// and the difference form is exact.
    ///
    /// # Errors
    /// - `AnalyticError::InvalidBarriers` if `lower >= upper`
    /// - `AnalyticError::InvalidStrike` if `lower` is non-positive
    /// - `AnalyticError::InvalidExpiry` if `expiry` is non-positive
    pub fn price_double_digital(&self, lower: T, upper: T, expiry: T) -> Result<T, AnalyticError> {
        if lower >= upper {
            return Err(AnalyticError::InvalidBarriers {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        let above_lower = self.price_digital_call(lower, expiry)?;
        let above_upper = self.price_digital_call(upper, expiry)?;
        Ok(above_lower - above_upper)
    }

    /// Prices a payoff variant with this model.
    ///
    /// Dispatches over the closed variant set; every variant has a closed
    /// form under lognormal dynamics.
    ///
    /// # Examples
    /// ```
    /// use kernel_models::analytical::BlackScholes;
    /// use kernel_models::instruments::Payoff;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let band = Payoff::double_digital(100.0, 120.0).unwrap();
    /// let price = bs.price(&band, 1.0).unwrap();
    /// assert!(price > 0.0 && price < 1.0);
    /// ```
    pub fn price(&self, payoff: &Payoff<T>, expiry: T) -> Result<T, AnalyticError> {
        match *payoff {
            Payoff::Call { strike } => self.price_call(strike, expiry),
            Payoff::Put { strike } => self.price_put(strike, expiry),
            Payoff::DigitalCall { strike } => self.price_digital_call(strike, expiry),
            Payoff::DigitalPut { strike } => self.price_digital_put(strike, expiry),
            Payoff::DoubleDigital { lower, upper } => {
                self.price_double_digital(lower, upper, expiry)
            }
        }
    }
}

#[inline]
fn check_strike_expiry<T: Float>(strike: T, expiry: T) -> Result<(), AnalyticError> {
    let zero = T::zero();
    if strike <= zero {
        return Err(AnalyticError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    if expiry <= zero {
        return Err(AnalyticError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

#[inline]
fn ensure_finite<T: Float>(value: T, context: &'static str) -> Result<T, AnalyticError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticError::Overflow { context })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Constructor tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        let result = BlackScholes::new(-100.0_f64, 0.05, 0.2);
        match result {
            Err(AnalyticError::InvalidSpot { spot }) => assert_eq!(spot, -100.0),
            _ => panic!("Expected InvalidSpot error"),
        }
    }

    #[test]
    fn test_new_invalid_volatility_zero() {
        // σ = 0 must fail fast, not return NaN/Inf later
        let result = BlackScholes::new(100.0_f64, 0.05, 0.0);
        assert!(matches!(
            result,
            Err(AnalyticError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    #[test]
    fn test_from_params() {
        let params = OptionParams::new(100.0_f64, 110.0, 0.05, 0.2, 1.0).unwrap();
        let bs = BlackScholes::from_params(&params).unwrap();
        assert_eq!(bs.spot(), 100.0);
    }

    #[test]
    fn test_expiry_zero_rejected() {
        // T = 0 must fail with a domain error, not return NaN/Inf
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(matches!(
            bs.price_call(100.0, 0.0),
            Err(AnalyticError::InvalidExpiry { .. })
        ));
    }

    // ==========================================================
    // d1/d2 tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r = 0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let d1 = bs.d1(105.0, 0.5);
        let d2 = bs.d2(105.0, 0.5);
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-10);
    }

    // ==========================================================
    // Price tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1 → C ≈ 10.4506
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0).unwrap();
        assert_relative_eq!(price, 10.4506, epsilon = 0.001);
    }

    #[test]
    fn test_put_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1 → P ≈ 5.5735
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_put(100.0, 1.0).unwrap();
        assert_relative_eq!(price, 5.5735, epsilon = 0.001);
    }

    #[test]
    fn test_deep_itm_call_above_forward_intrinsic() {
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0).unwrap();
        let intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0).unwrap();
        assert!(price < 0.01);
        assert!(price >= 0.0);
    }

    // ==========================================================
    // Put-call parity tests
    // ==========================================================

    #[test]
    fn test_put_call_parity() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let call = bs.price_call(100.0, 1.0).unwrap();
        let put = bs.price_put(100.0, 1.0).unwrap();
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert!((call - put - forward).abs() < 1e-9);
    }

    #[test]
    fn test_put_call_parity_various_strikes() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = bs.price_call(strike, 1.0).unwrap();
            let put = bs.price_put(strike, 1.0).unwrap();
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert!((call - put - forward).abs() < 1e-9);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = BlackScholes::new(100.0_f64, -0.02, 0.2).unwrap();
        let call = bs.price_call(100.0, 1.0).unwrap();
        let put = bs.price_put(100.0, 1.0).unwrap();
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert!((call - put - forward).abs() < 1e-9);
    }

    // ==========================================================
    // Digital price tests
    // ==========================================================

    #[test]
    fn test_digital_call_put_sum_to_discount() {
        // N(d2) + N(-d2) = 1, so digital call + digital put = e^(-rT)
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let dc = bs.price_digital_call(100.0, 1.0).unwrap();
        let dp = bs.price_digital_put(100.0, 1.0).unwrap();
        assert_relative_eq!(dc + dp, (-0.05_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_digital_call_reference_value() {
        // e^(-0.05)·N(d2) with S=K=100, r=0.05, σ=0.2, T=1 ≈ 0.5323
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_digital_call(100.0, 1.0).unwrap();
        assert_relative_eq!(price, 0.53232, epsilon = 1e-4);
    }

    #[test]
    fn test_double_digital_reference_value() {
        // Difference of digital calls struck at 100 and 120
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_double_digital(100.0, 120.0, 1.0).unwrap();
        assert_relative_eq!(price, 0.320061, epsilon = 1e-4);
    }

    #[test]
    fn test_double_digital_matches_difference_of_digitals() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let band = bs.price_double_digital(100.0, 120.0, 1.0).unwrap();
        let low = bs.price_digital_call(100.0, 1.0).unwrap();
        let high = bs.price_digital_call(120.0, 1.0).unwrap();
        assert_relative_eq!(band, low - high, epsilon = 1e-12);
    }

    #[test]
    fn test_double_digital_unordered_barriers_rejected() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.price_double_digital(120.0, 100.0, 1.0).is_err());
    }

    // ==========================================================
    // Payoff dispatch tests
    // ==========================================================

    #[test]
    fn test_price_dispatch_matches_direct_calls() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

        let call = Payoff::call(100.0).unwrap();
        assert_eq!(
            bs.price(&call, 1.0).unwrap(),
            bs.price_call(100.0, 1.0).unwrap()
        );

        let put = Payoff::put(100.0).unwrap();
        assert_eq!(
            bs.price(&put, 1.0).unwrap(),
            bs.price_put(100.0, 1.0).unwrap()
        );

        let band = Payoff::double_digital(100.0, 120.0).unwrap();
        assert_eq!(
            bs.price(&band, 1.0).unwrap(),
            bs.price_double_digital(100.0, 120.0, 1.0).unwrap()
        );
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        let call = bs.price_call(100.0_f32, 1.0_f32).unwrap();
        assert!((call - 10.45_f32).abs() < 0.05);
    }
}
