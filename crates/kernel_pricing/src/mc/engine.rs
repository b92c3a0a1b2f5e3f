//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for terminal-draw Monte
//! Carlo pricing of European payoffs.
//!
//! # Overview
//!
//! The [`MonteCarloEngine`] coordinates:
//! 1. Random number generation (via [`GaussianSampler`](crate::rng::GaussianSampler))
//! 2. Terminal spot simulation under geometric Brownian motion
//! 3. Payoff evaluation (via [`Payoff::evaluate`])
//! 4. Discounting and aggregation with standard-error estimation
//!
//! # Single Terminal Draw
//!
//! European payoffs depend only on the terminal spot, so each path is a
//! single log-normal draw rather than a time-stepped walk:
//!
//! S_T = S·exp(T·(r - σ²/2))·exp(σ·√T·z), z ~ N(0, 1)
//!
//! The drift and diffusion factors outside z are precomputed once per run.

use kernel_models::instruments::Payoff;

use super::config::MonteCarloConfig;
use super::error::EngineError;
use crate::rng::GaussianSampler;

/// Geometric Brownian motion parameters for a pricing run.
///
/// Validated at construction; the engine assumes the invariants hold.
///
/// # Examples
///
/// ```rust
/// use kernel_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0).unwrap();
/// assert_eq!(params.spot, 100.0);
///
/// assert!(GbmParams::new(100.0, 0.05, -0.2, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Spot price (S), positive.
    pub spot: f64,
    /// Risk-free drift rate (r); any finite value.
    pub rate: f64,
    /// Volatility (σ), positive.
    pub volatility: f64,
    /// Time to expiry in years (T), positive.
    pub expiry: f64,
}

impl GbmParams {
    /// Creates validated GBM parameters.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidParameter` if spot, volatility, or
    /// expiry is non-positive.
    pub fn new(spot: f64, rate: f64, volatility: f64, expiry: f64) -> Result<Self, EngineError> {
        let params = Self {
            spot,
            rate,
            volatility,
            expiry,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidParameter` naming the offending field.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.spot <= 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "spot",
                value: format!("must be positive, got {}", self.spot),
            });
        }
        if self.volatility <= 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "volatility",
                value: format!("must be positive, got {}", self.volatility),
            });
        }
        if self.expiry <= 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "expiry",
                value: format!("must be positive, got {}", self.expiry),
            });
        }
        Ok(())
    }
}

/// Monte Carlo pricing result.
///
/// Contains the discounted price estimate and its standard error.
///
/// # Examples
///
/// ```rust
/// use kernel_pricing::mc::SimulationResult;
///
/// let result = SimulationResult {
///     price: 10.45,
///     std_error: 0.05,
///     n_paths: 100_000,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationResult {
    /// Present value of the payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of paths used.
    pub n_paths: usize,
}

impl SimulationResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Orchestrates Gaussian sampling, terminal-spot simulation, payoff
/// evaluation, and discounting. Deterministic for a fixed seed and
/// configuration.
///
/// # Examples
///
/// ```rust
/// use kernel_models::instruments::Payoff;
/// use kernel_pricing::mc::{GbmParams, MonteCarloConfig, MonteCarloEngine};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut engine = MonteCarloEngine::new(config).unwrap();
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0).unwrap();
/// let payoff = Payoff::call(100.0).unwrap();
///
/// let result = engine.price(params, &payoff).unwrap();
/// assert!(result.price > 0.0);
/// ```
pub struct MonteCarloEngine {
    config: MonteCarloConfig,
    rng: GaussianSampler,
}

impl MonteCarloEngine {
    /// Creates a new engine with the given configuration.
    ///
    /// An unset seed falls back to 0 so that runs stay deterministic.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let seed = config.seed().unwrap_or(0);
        let rng = GaussianSampler::from_seed(seed);

        Ok(Self { config, rng })
    }

    /// Creates a new engine with a specific seed, overriding the config seed.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the configuration is invalid.
    pub fn with_seed(config: MonteCarloConfig, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;

        let rng = GaussianSampler::from_seed(seed);

        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Resets the RNG to the configured seed so the next run replays.
    pub fn reset(&mut self) {
        self.rng = GaussianSampler::from_seed(self.config.seed().unwrap_or(0));
    }

    /// Resets the RNG with a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = GaussianSampler::from_seed(seed);
    }

    /// Prices a European payoff, discounting at the GBM drift rate.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidParameter` for invalid GBM parameters
    /// and `EngineError::NumericalOverflow` if the simulation produces a
    /// non-finite value.
    pub fn price(
        &mut self,
        params: GbmParams,
        payoff: &Payoff<f64>,
    ) -> Result<SimulationResult, EngineError> {
        self.price_with_discount(params, payoff, params.rate)
    }

    /// Prices a European payoff with a discount rate that may differ from
    /// the GBM drift rate.
    ///
    /// # Errors
    ///
    /// Same conditions as [`price`](Self::price).
    pub fn price_with_discount(
        &mut self,
        params: GbmParams,
        payoff: &Payoff<f64>,
        discount_rate: f64,
    ) -> Result<SimulationResult, EngineError> {
        params.validate()?;

        let n_paths = self.config.n_paths();

        // Terminal-draw GBM: factor out everything that does not depend
        // on the Gaussian draw.
        let drifted =
            params.spot * (params.expiry * (params.rate - 0.5 * params.volatility.powi(2))).exp();
        let diffusion = params.volatility * params.expiry.sqrt();

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n_paths {
            let z = self.rng.sample();
            let terminal = drifted * (diffusion * z).exp();
            let value = payoff.evaluate(terminal);
            sum += value;
            sum_sq += value * value;
        }

        let n = n_paths as f64;
        let discount = (-discount_rate * params.expiry).exp();
        let mean = sum / n;
        let price = mean * discount;

        // Sample variance of the undiscounted payoff; a single path gives
        // no variance estimate.
        let std_error = if n_paths > 1 {
            let variance = ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
            discount * (variance / n).sqrt()
        } else {
            0.0
        };

        if !price.is_finite() || !std_error.is_finite() {
            return Err(EngineError::NumericalOverflow {
                context: "discounted mean",
            });
        }

        Ok(SimulationResult {
            price,
            std_error,
            n_paths,
        })
    }
}
