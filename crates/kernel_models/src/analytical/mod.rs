//! Analytical pricing formulas.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for vanilla and digital options
//! - Goldman–Sosin–Gatto formulas for floating-strike lookback options
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Fail fast**: Domain errors are raised before any formula runs
//! - **No silent infinities**: Non-finite results are reported as errors

pub mod black_scholes;
pub mod error;
pub mod lookback;

pub use black_scholes::BlackScholes;
pub use error::AnalyticError;
pub use lookback::LookbackPricer;
