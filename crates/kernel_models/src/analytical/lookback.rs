//! Closed-form pricing for floating-strike lookback options.
//!
//! This module implements the Goldman–Sosin–Gatto formulas. The running
//! extremum observed so far (minimum for the call, maximum for the put) is
//! supplied by the caller; the kernel does not track paths itself.
//!
//! ## Mathematical Formulas
//!
//! With H the running extremum:
//!
//! - a₁ = (ln(S/H) + (r + σ²/2)T) / (σ√T)
//! - a₂ = a₁ - σ√T
//! - a₃ = a₁ - 2r√T/σ
//!
//! **Call** (H = running minimum m):
//! S·N(a₁) - m·e^(-rT)·N(a₂) - (Sσ²/2r)·\[N(-a₁) - e^(-rT)·(m/S)^(2r/σ²)·N(-a₃)\]
//!
//! **Put** (H = running maximum M):
//! -S·N(-a₁) + M·e^(-rT)·N(-a₂) + (Sσ²/2r)·\[N(a₁) - e^(-rT)·(M/S)^(2r/σ²)·N(a₃)\]
//!
//! Both formulas divide by r, so r = 0 is a domain error, rejected at
//! construction rather than propagated as infinity.

use num_traits::Float;

use kernel_core::math::distributions::norm_cdf;

use super::error::AnalyticError;

/// Goldman–Sosin–Gatto pricer for floating-strike lookback options.
///
/// Holds the market state (spot, rate, volatility); the running extremum
/// and expiry are supplied per pricing call.
///
/// # Examples
/// ```
/// use kernel_models::analytical::LookbackPricer;
///
/// let pricer = LookbackPricer::new(100.0_f64, 0.1, 0.3).unwrap();
/// let call = pricer.price_floating_call(90.0, 1.0).unwrap();
/// assert!(call > 0.0);
///
/// // r = 0 divides the formula by zero and is rejected up front
/// assert!(LookbackPricer::new(100.0_f64, 0.0, 0.3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookbackPricer<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r), non-zero
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> LookbackPricer<T> {
    /// Creates a new lookback pricer.
    ///
    /// # Errors
    /// - `AnalyticError::InvalidSpot` if spot <= 0
    /// - `AnalyticError::InvalidVolatility` if volatility <= 0
    /// - `AnalyticError::ZeroRate` if rate == 0 (the closed forms divide by r)
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

        if rate == zero {
            return Err(AnalyticError::ZeroRate);
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
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

    /// a₁ = (ln(S/H) + (r + σ²/2)T) / (σ√T)
    #[inline]
    fn a1(&self, extremum: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let num = (self.spot / extremum).ln()
            + (self.rate + half * self.volatility * self.volatility) * expiry;
        num / (self.volatility * expiry.sqrt())
    }

    /// a₂ = a₁ - σ√T
    #[inline]
    fn a2(&self, extremum: T, expiry: T) -> T {
        self.a1(extremum, expiry) - self.volatility * expiry.sqrt()
    }

    /// a₃ = a₁ - 2r√T/σ
    #[inline]
    fn a3(&self, extremum: T, expiry: T) -> T {
        let two = T::from(2.0).unwrap();
        self.a1(extremum, expiry) - two * self.rate * expiry.sqrt() / self.volatility
    }

    /// Prices a floating-strike lookback call against the running minimum.
    ///
    /// # Arguments
    /// * `minimum` - Minimum spot observed over the option's life so far
    /// * `expiry` - Time to expiry in years
    ///
    /// # Errors
    /// - `AnalyticError::InvalidExtremum` if minimum <= 0
    /// - `AnalyticError::InvalidExpiry` if expiry <= 0
    /// - `AnalyticError::Overflow` if the formula produces a non-finite value
    pub fn price_floating_call(&self, minimum: T, expiry: T) -> Result<T, AnalyticError> {
        check_extremum_expiry(minimum, expiry)?;

        let a1 = self.a1(minimum, expiry);
        let a2 = self.a2(minimum, expiry);
        let a3 = self.a3(minimum, expiry);

        let two = T::from(2.0).unwrap();
        let discount = (-self.rate * expiry).exp();
        let vol_sq = self.volatility * self.volatility;

        let term1 = self.spot * norm_cdf(a1);
        let term2 = minimum * discount * norm_cdf(a2);
        let mult = self.spot * vol_sq / (two * self.rate);
        let power = (minimum / self.spot).powf(two * self.rate / vol_sq);
        let term3 = norm_cdf(-a1) - discount * power * norm_cdf(-a3);

        ensure_finite(term1 - term2 - mult * term3, "lookback call")
    }

    /// Prices a floating-strike lookback put against the running maximum.
    ///
    /// # Arguments
    /// * `maximum` - Maximum spot observed over the option's life so far
    /// * `expiry` - Time to expiry in years
    ///
    /// # Errors
    /// Same conditions as [`price_floating_call`](Self::price_floating_call).
    pub fn price_floating_put(&self, maximum: T, expiry: T) -> Result<T, AnalyticError> {
        check_extremum_expiry(maximum, expiry)?;

        let a1 = self.a1(maximum, expiry);
        let a2 = self.a2(maximum, expiry);
        let a3 = self.a3(maximum, expiry);

        let two = T::from(2.0).unwrap();
        let discount = (-self.rate * expiry).exp();
        let vol_sq = self.volatility * self.volatility;

        let term1 = -self.spot * norm_cdf(-a1);
        let term2 = maximum * discount * norm_cdf(-a2);
        let mult = self.spot * vol_sq / (two * self.rate);
        let power = (maximum / self.spot).powf(two * self.rate / vol_sq);
        let term3 = norm_cdf(a1) - discount * power * norm_cdf(a3);

        ensure_finite(term1 + term2 + mult * term3, "lookback put")
    }
}

#[inline]
fn check_extremum_expiry<T: Float>(extremum: T, expiry: T) -> Result<(), AnalyticError> {
    let zero = T::zero();
    if extremum <= zero {
        return Err(AnalyticError::InvalidExtremum {
            extremum: extremum.to_f64().unwrap_or(f64::NAN),
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
