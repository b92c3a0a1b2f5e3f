//! Instrument definitions.
//!
//! This module provides the payoff abstraction and parameter bundles used by
//! both the analytical pricers and the Monte Carlo engine.
//!
//! # Architecture
//!
//! Payoffs use enum dispatch (NOT trait objects): the variant set is closed
//! and small, so a tagged union with a `match` in `evaluate` replaces the
//! abstract-base-class pattern.

pub mod error;
pub mod params;
pub mod payoff;

pub use error::InstrumentError;
pub use params::OptionParams;
pub use payoff::Payoff;
