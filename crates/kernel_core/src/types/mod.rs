//! Shared types for the pricing kernel.

pub mod error;

pub use error::PricingError;
