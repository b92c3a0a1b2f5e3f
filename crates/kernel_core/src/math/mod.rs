//! Mathematical building blocks shared by the analytic and simulation layers.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
