//! # Kernel Models: Instruments and Closed-Form Pricers
//!
//! Payoff functions, parameter bundles, and analytical pricing formulas.
//!
//! This crate provides:
//! - Payoff definitions over a closed variant set (vanilla and digital)
//! - Immutable, validated option parameter bundles
//! - Black-Scholes closed forms for vanilla and digital options
//! - Goldman–Sosin–Gatto closed forms for floating-strike lookback options
//!
//! ## Design Principles
//!
//! - **Enum-based payoffs** for static dispatch over a fixed variant set
//! - **Validating constructors** returning `Result`: invalid financial
//!   parameters are rejected before any computation runs
//! - **Generic over `T: Float`** so formulas work with `f64` and `f32`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
