//! Interpolation over regular 2D grids.
//!
//! This module reconstructs a continuous scalar field from samples on a
//! uniformly spaced, axis-aligned grid. All interpolants are generic over
//! `T: num_traits::Float`, so the same code serves `f32` and `f64` fields.
//!
//! ## Available Interpolants
//!
//! - [`BilinearGrid`]: Piecewise bilinear interpolation with first-order
//!   partial derivatives
//!
//! ## Core Trait
//!
//! Every interpolant implements [`GridInterpolator`], which defines:
//! - `evaluate(x, y) -> T`: Interpolated value
//! - `evaluate_derivative(x_order, y_order, x, y) -> T`: Partial derivative
//! - `domain_x()`, `domain_y()`: Sampled coordinate ranges
//!
//! Evaluation is infallible. Queries outside the sampled domain are resolved
//! by clamping the cell index to the grid; see [`BilinearGrid`] for the exact
//! edge policy.
//!
//! ## Example
//!
//! ```
//! use gridfield_core::math::interpolators::{BilinearGrid, GridInterpolator};
//!
//! let samples = [0.0, 2.0, 4.0, 6.0];
//! let grid = BilinearGrid::new(2, 2, 0.0, 1.0, 0.0, 1.0, &samples).unwrap();
//!
//! assert_eq!(grid.domain_x(), (0.0, 1.0));
//! assert_eq!(grid.evaluate(0.5, 0.5), 3.0);
//! assert_eq!(grid.evaluate_derivative(1, 0, 0.5, 0.5), 2.0);
//! assert_eq!(grid.evaluate_derivative(2, 0, 0.5, 0.5), 0.0);
//! ```

mod bilinear;
mod blend;
mod traits;

// Re-export public types at module level
pub use bilinear::BilinearGrid;
pub use traits::GridInterpolator;
