//! # kernel_core: Mathematical Foundation for the Option-Pricing Kernel
//!
//! ## Foundation Layer Role
//!
//! kernel_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other kernel_* crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use kernel_core::math::distributions::norm_cdf;
//! use kernel_core::types::PricingError;
//!
//! let phi = norm_cdf(0.0_f64);
//! assert!((phi - 0.5).abs() < 1e-7);
//!
//! let err = PricingError::InvalidInput("negative spot".to_string());
//! assert!(format!("{}", err).contains("spot"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
