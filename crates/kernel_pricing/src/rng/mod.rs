//! Random number generation for Monte Carlo simulations.
//!
//! Provides [`GaussianSampler`], a seeded standard-normal sampler built on
//! the Marsaglia polar method.

pub mod gaussian;

pub use gaussian::GaussianSampler;
