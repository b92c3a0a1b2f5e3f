//! Monte Carlo pricing.
//!
//! Terminal-draw geometric Brownian motion simulation for European
//! payoffs: one log-normal draw per path, payoff evaluation, discounted
//! mean with a standard-error estimate.

pub mod config;
pub mod engine;
pub mod error;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS};
pub use engine::{GbmParams, MonteCarloEngine, SimulationResult};
pub use error::EngineError;
