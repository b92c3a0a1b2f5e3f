//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! All functions are generic over `T: Float` so the closed-form pricers can
//! be instantiated with `f64` or `f32`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the Zelen–Severo polynomial
/// approximation (Abramowitz & Stegun 26.2.17) on the positive branch:
///
/// Φ(x) = 1 − φ(x)·(b₁k + b₂k² + b₃k³ + b₄k⁴ + b₅k⁵),  k = 1/(1 + 0.2316419·x)
///
/// Negative arguments are derived from the positive branch via
/// Φ(−x) = 1 − Φ(x), so the symmetry law `norm_cdf(x) + norm_cdf(-x) == 1`
/// holds to f64 rounding rather than to the polynomial's fit error.
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite x.
///
/// # Examples
/// ```
/// use kernel_core::math::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// // Exact symmetry
/// let x = 1.37_f64;
/// assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    // Φ(0) = 0.5 exactly; the polynomial carries a ~5e-10 fit error at the
    // origin, and both +0.0 and -0.0 would land on the positive branch.
    if x == zero {
        return T::from(0.5).unwrap();
    }

    // Negative branch derived from the positive one: keeps symmetry exact.
    if x < zero {
        return one - norm_cdf(-x);
    }

    // Zelen–Severo constants (A&S 26.2.17)
    let b1 = T::from(0.319_381_530).unwrap();
    let b2 = T::from(-0.356_563_782).unwrap();
    let b3 = T::from(1.781_477_937).unwrap();
    let b4 = T::from(-1.821_255_978).unwrap();
    let b5 = T::from(1.330_274_429).unwrap();
    let p = T::from(0.231_641_9).unwrap();

    let k = one / (one + p * x);

    // Horner's method for polynomial evaluation
    let poly = k * (b1 + k * (b2 + k * (b3 + k * (b4 + b5 * k))));

    one - norm_pdf(x) * poly
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Examples
/// ```
/// use kernel_core::math::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}
