//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from grid interpolant construction

use thiserror::Error;

/// Grid construction errors.
///
/// Every variant describes a configuration problem detected while building
/// an interpolant. Evaluation itself never fails, so these errors only
/// surface from constructors and [`GridSpec::validate`].
///
/// # Variants
/// - `InsufficientData`: Fewer than two samples along an axis
/// - `InvalidSpacing`: Cell size not strictly positive and finite
/// - `InvalidOrigin`: Grid origin not finite
/// - `SampleCountMismatch`: Sample buffer length differs from the grid size
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use gridfield_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { axis: "x", got: 1, need: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient data points on x axis: got 1, need at least 2"
/// );
/// ```
///
/// [`GridSpec::validate`]: crate::types::GridSpec::validate
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InterpolationError {
    /// Insufficient sample count along one axis.
    #[error("Insufficient data points on {axis} axis: got {got}, need at least {need}")]
    InsufficientData {
        /// Axis name (`"x"` or `"y"`)
        axis: &'static str,
        /// Number of samples provided
        got: usize,
        /// Minimum number of samples required
        need: usize,
    },

    /// Cell spacing is zero, negative, or not finite.
    #[error("Invalid spacing on {axis} axis: {spacing} (must be positive and finite)")]
    InvalidSpacing {
        /// Axis name (`"x"` or `"y"`)
        axis: &'static str,
        /// The rejected spacing
        spacing: f64,
    },

    /// Grid origin is not finite.
    #[error("Invalid origin on {axis} axis: {min}")]
    InvalidOrigin {
        /// Axis name (`"x"` or `"y"`)
        axis: &'static str,
        /// The rejected origin
        min: f64,
    },

    /// Sample buffer length does not match `x_bound * y_bound`.
    #[error("Sample buffer holds {got} values, grid requires {expected}")]
    SampleCountMismatch {
        /// Length of the supplied buffer
        got: usize,
        /// Expected number of samples
        expected: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
