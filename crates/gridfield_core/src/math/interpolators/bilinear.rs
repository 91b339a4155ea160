//! Bilinear interpolation over a regular 2D grid.

use super::blend::{axis_basis, blend};
use super::traits::GridInterpolator;
use crate::types::{GridAxis, GridSpec, InterpolationError, UniformAxis};
use num_traits::Float;
use tracing::{debug, warn};

/// Bilinear interpolant over a uniformly spaced grid of samples.
///
/// The samples are borrowed, never copied: the buffer must outlive the
/// interpolant, which the lifetime `'a` enforces.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Grid Layout
///
/// Samples are row-major with x varying fastest: node `(ix, iy)` sits at
/// `(x_min + ix * x_spacing, y_min + iy * y_spacing)` and is stored at
/// `samples[ix + x_bound * iy]`.
///
/// # Edge Policy
///
/// A query is resolved to the cell `floor((x - x_min) / x_spacing)` clamped
/// to `[0, x_bound - 1]` (likewise for y), and the fractional offset is
/// measured from that cell without clamping. Neighbour lookups past the last
/// column or row reuse the boundary samples. Consequently:
///
/// - below `x_min` the first cell's linear form is extended,
/// - above `x_max` the last column is repeated and the field is flat in x.
///
/// # Example
///
/// ```
/// use gridfield_core::math::interpolators::{BilinearGrid, GridInterpolator};
///
/// // f(x, y) = x + 10 y sampled on a 3 x 2 grid
/// let samples = [0.0, 1.0, 2.0, 10.0, 11.0, 12.0];
/// let grid = BilinearGrid::new(3, 2, 0.0, 1.0, 0.0, 1.0, &samples).unwrap();
///
/// assert_eq!(grid.evaluate(1.5, 0.5), 6.5);
/// assert_eq!(grid.evaluate_derivative(0, 1, 1.5, 0.5), 10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BilinearGrid<'a, T: Float> {
    x: UniformAxis<T>,
    y: UniformAxis<T>,
    quantity: usize,
    samples: &'a [T],
}

impl<'a, T: Float> BilinearGrid<'a, T> {
    /// Construct a bilinear interpolant from grid parameters and samples.
    ///
    /// # Arguments
    ///
    /// * `x_bound`, `y_bound` - Number of samples per axis (each >= 2)
    /// * `x_min`, `y_min` - Coordinates of the first sample per axis
    /// * `x_spacing`, `y_spacing` - Distance between samples (each > 0)
    /// * `samples` - Row-major buffer of exactly `x_bound * y_bound` values
    ///
    /// # Errors
    ///
    /// * `InsufficientData` - A bound is below 2
    /// * `InvalidSpacing` - A spacing is not strictly positive and finite
    /// * `InvalidOrigin` - An origin is not finite
    /// * `SampleCountMismatch` - `samples.len() != x_bound * y_bound`
    /// * `InvalidInput` - The grid size overflows `usize`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_bound: usize,
        y_bound: usize,
        x_min: T,
        x_spacing: T,
        y_min: T,
        y_spacing: T,
        samples: &'a [T],
    ) -> Result<Self, InterpolationError> {
        let spec = GridSpec::new(
            GridAxis::new(x_bound, x_min, x_spacing),
            GridAxis::new(y_bound, y_min, y_spacing),
        );
        Self::from_spec(&spec, samples)
    }

    /// Construct a bilinear interpolant from a grid description.
    ///
    /// See [`BilinearGrid::new`] for the validation rules.
    pub fn from_spec(spec: &GridSpec<T>, samples: &'a [T]) -> Result<Self, InterpolationError> {
        match Self::build(spec, samples) {
            Ok(grid) => {
                debug!(
                    x_bound = grid.x.bound(),
                    y_bound = grid.y.bound(),
                    quantity = grid.quantity,
                    "constructed bilinear grid"
                );
                Ok(grid)
            }
            Err(err) => {
                warn!(error = %err, "rejected bilinear grid");
                Err(err)
            }
        }
    }

    fn build(spec: &GridSpec<T>, samples: &'a [T]) -> Result<Self, InterpolationError> {
        let (x, y, quantity) = spec.resolve()?;
        if samples.len() != quantity {
            return Err(InterpolationError::SampleCountMismatch {
                got: samples.len(),
                expected: quantity,
            });
        }
        Ok(Self {
            x,
            y,
            quantity,
            samples,
        })
    }

    /// Number of samples along x.
    #[inline]
    pub fn x_bound(&self) -> usize {
        self.x.bound()
    }

    /// Number of samples along y.
    #[inline]
    pub fn y_bound(&self) -> usize {
        self.y.bound()
    }

    /// Total number of samples, `x_bound * y_bound`.
    #[inline]
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// The borrowed sample buffer.
    #[inline]
    pub fn samples(&self) -> &'a [T] {
        self.samples
    }

    /// Sample at node `(ix, iy)`, or `None` outside the grid.
    #[inline]
    pub fn sample(&self, ix: usize, iy: usize) -> Option<T> {
        if ix < self.x.bound() && iy < self.y.bound() {
            Some(self.node(ix, iy))
        } else {
            None
        }
    }

    /// Coordinate of the first column.
    #[inline]
    pub fn x_min(&self) -> T {
        self.x.min()
    }

    /// Coordinate of the last column.
    #[inline]
    pub fn x_max(&self) -> T {
        self.x.max()
    }

    /// Column spacing.
    #[inline]
    pub fn x_spacing(&self) -> T {
        self.x.spacing()
    }

    /// Coordinate of the first row.
    #[inline]
    pub fn y_min(&self) -> T {
        self.y.min()
    }

    /// Coordinate of the last row.
    #[inline]
    pub fn y_max(&self) -> T {
        self.y.max()
    }

    /// Row spacing.
    #[inline]
    pub fn y_spacing(&self) -> T {
        self.y.spacing()
    }

    /// The grid description this interpolant was built from.
    pub fn spec(&self) -> GridSpec<T> {
        GridSpec::new(
            GridAxis::new(self.x.bound(), self.x.min(), self.x.spacing()),
            GridAxis::new(self.y.bound(), self.y.min(), self.y.spacing()),
        )
    }

    #[inline]
    fn node(&self, ix: usize, iy: usize) -> T {
        self.samples[ix + self.x.bound() * iy]
    }

    /// Compute `(M·U)ᵀ D (M·V)` where `D` is the 2x2 block of samples at
    /// `(ix, iy)` with neighbour indices clamped to the grid.
    #[inline]
    fn accumulate(&self, ix: usize, iy: usize, u: [T; 2], v: [T; 2]) -> T {
        let p = blend(u);
        let q = blend(v);

        let mut result = T::zero();
        for (row, &q_row) in q.iter().enumerate() {
            let y_clamp = self.y.clamp_index(iy + row);
            for (col, &p_col) in p.iter().enumerate() {
                let x_clamp = self.x.clamp_index(ix + col);
                result = result + p_col * q_row * self.node(x_clamp, y_clamp);
            }
        }
        result
    }
}

impl<T: Float> GridInterpolator<T> for BilinearGrid<'_, T> {
    /// Interpolated value at `(x, y)`.
    ///
    /// # Formula
    ///
    /// ```text
    /// f = (1-dx)(1-dy) f00 + dx(1-dy) f10 + (1-dx) dy f01 + dx dy f11
    /// ```
    ///
    /// where `dx`, `dy` are the fractional offsets within the resolved cell.
    fn evaluate(&self, x: T, y: T) -> T {
        let (ix, dx) = self.x.locate(x);
        let (iy, dy) = self.y.locate(y);
        self.accumulate(ix, iy, [T::one(), dx], [T::one(), dy])
    }

    /// Partial derivative of the interpolant.
    ///
    /// Orders 0 and 1 are supported per axis; any higher order on either
    /// axis yields zero since the interpolant is piecewise linear.
    fn evaluate_derivative(&self, x_order: u32, y_order: u32, x: T, y: T) -> T {
        let (ix, dx) = self.x.locate(x);
        let (iy, dy) = self.y.locate(y);

        let Some((u, x_mult)) = axis_basis(x_order, dx, self.x.inv_spacing()) else {
            return T::zero();
        };
        let Some((v, y_mult)) = axis_basis(y_order, dy, self.y.inv_spacing()) else {
            return T::zero();
        };

        self.accumulate(ix, iy, u, v) * (x_mult * y_mult)
    }

    #[inline]
    fn domain_x(&self) -> (T, T) {
        (self.x.min(), self.x.max())
    }

    #[inline]
    fn domain_y(&self) -> (T, T) {
        (self.y.min(), self.y.max())
    }
}
