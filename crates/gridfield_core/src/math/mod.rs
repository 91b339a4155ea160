//! Numerical methods over sampled fields.
//!
//! - `interpolators`: Grid interpolants and their evaluation trait

pub mod interpolators;
