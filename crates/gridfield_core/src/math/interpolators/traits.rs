//! Evaluation trait for interpolants over regular 2D grids.

use num_traits::Float;

/// A continuous scalar field reconstructed from grid samples.
///
/// Implementations are defined for every query point: coordinates outside
/// the sampled domain are resolved by the implementation's edge policy
/// rather than reported as errors.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use gridfield_core::math::interpolators::{BilinearGrid, GridInterpolator};
///
/// let samples = [0.0, 2.0, 4.0, 6.0];
/// let grid = BilinearGrid::new(2, 2, 0.0, 1.0, 0.0, 1.0, &samples).unwrap();
///
/// assert_eq!(grid.evaluate(0.5, 0.5), 3.0);
/// assert_eq!(grid.gradient(0.5, 0.5), (2.0, 4.0));
/// ```
pub trait GridInterpolator<T: Float> {
    /// Interpolated value at `(x, y)`.
    fn evaluate(&self, x: T, y: T) -> T;

    /// Partial derivative `∂^(x_order + y_order) f / ∂x^x_order ∂y^y_order`
    /// at `(x, y)`.
    fn evaluate_derivative(&self, x_order: u32, y_order: u32, x: T, y: T) -> T;

    /// Sampled x range `(x_min, x_max)`.
    fn domain_x(&self) -> (T, T);

    /// Sampled y range `(y_min, y_max)`.
    fn domain_y(&self) -> (T, T);

    /// First-order partial derivatives `(∂f/∂x, ∂f/∂y)` at `(x, y)`.
    #[inline]
    fn gradient(&self, x: T, y: T) -> (T, T) {
        (
            self.evaluate_derivative(1, 0, x, y),
            self.evaluate_derivative(0, 1, x, y),
        )
    }

    /// Evaluate at each `(x, y)` in `points`.
    fn evaluate_many(&self, points: &[(T, T)]) -> Vec<T> {
        points.iter().map(|&(x, y)| self.evaluate(x, y)).collect()
    }
}
