//! Regular grid description types.
//!
//! A [`GridSpec`] is the configuration record for a uniformly spaced,
//! axis-aligned 2D grid: one [`GridAxis`] per direction. Validating an axis
//! yields a [`UniformAxis`], which caches the derived quantities (upper
//! bound, inverse spacing) and resolves continuous coordinates to cells.

use super::error::InterpolationError;
use num_traits::Float;

/// Minimum number of samples along each axis.
pub const MIN_BOUND: usize = 2;

/// Configuration for one axis of a regular grid.
///
/// Sample `i` along the axis sits at `min + i * spacing` for
/// `i in 0..bound`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for coordinates (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use gridfield_core::types::GridAxis;
///
/// let axis = GridAxis::new(5, -1.0_f64, 0.5);
/// let resolved = axis.validate("x").unwrap();
/// assert_eq!(resolved.max(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridAxis<T: Float> {
    /// Number of samples along the axis (at least 2).
    pub bound: usize,

    /// Coordinate of the first sample.
    pub min: T,

    /// Distance between neighbouring samples (strictly positive).
    pub spacing: T,
}

impl<T: Float> GridAxis<T> {
    /// Create an axis description without validating it.
    pub fn new(bound: usize, min: T, spacing: T) -> Self {
        Self {
            bound,
            min,
            spacing,
        }
    }

    /// Check the axis invariants and compute its derived quantities.
    ///
    /// `axis` names the axis in error messages.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` - `bound < 2`
    /// * `InvalidSpacing` - `spacing` is not strictly positive and finite
    /// * `InvalidOrigin` - `min` is not finite
    /// * `InvalidInput` - `bound - 1` is not representable in `T`
    pub fn validate(&self, axis: &'static str) -> Result<UniformAxis<T>, InterpolationError> {
        if self.bound < MIN_BOUND {
            return Err(InterpolationError::InsufficientData {
                axis,
                got: self.bound,
                need: MIN_BOUND,
            });
        }
        // Written as a negated comparison so NaN is rejected too.
        if !(self.spacing > T::zero() && self.spacing.is_finite()) {
            return Err(InterpolationError::InvalidSpacing {
                axis,
                spacing: self.spacing.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !self.min.is_finite() {
            return Err(InterpolationError::InvalidOrigin {
                axis,
                min: self.min.to_f64().unwrap_or(f64::NAN),
            });
        }

        let last = T::from(self.bound - 1).ok_or_else(|| {
            InterpolationError::InvalidInput(format!(
                "{} axis bound {} is not representable",
                axis, self.bound
            ))
        })?;

        Ok(UniformAxis {
            bound: self.bound,
            min: self.min,
            max: self.min + self.spacing * last,
            spacing: self.spacing,
            inv_spacing: T::one() / self.spacing,
            last,
        })
    }
}

/// A validated grid axis with cached derived values.
///
/// Produced by [`GridAxis::validate`]; cannot be built any other way, so
/// every `UniformAxis` satisfies `bound >= 2` and `spacing > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformAxis<T: Float> {
    bound: usize,
    min: T,
    max: T,
    spacing: T,
    inv_spacing: T,
    /// `bound - 1` as `T`
    last: T,
}

impl<T: Float> UniformAxis<T> {
    /// Number of samples along the axis.
    #[inline]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Coordinate of the first sample.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Coordinate of the last sample: `min + spacing * (bound - 1)`.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Distance between neighbouring samples.
    #[inline]
    pub fn spacing(&self) -> T {
        self.spacing
    }

    /// Reciprocal of the spacing.
    #[inline]
    pub fn inv_spacing(&self) -> T {
        self.inv_spacing
    }

    /// Resolve a continuous coordinate to a cell and a fractional offset.
    ///
    /// The cell is `floor((coord - min) / spacing)` clamped to
    /// `[0, bound - 1]`. The offset is measured from the *clamped* cell
    /// using the *unclamped* index, so coordinates outside the axis give an
    /// offset outside `[0, 1)`:
    ///
    /// ```
    /// use gridfield_core::types::GridAxis;
    ///
    /// let axis = GridAxis::new(3, 0.0_f64, 1.0).validate("x").unwrap();
    /// assert_eq!(axis.locate(1.25), (1, 0.25));
    /// assert_eq!(axis.locate(-0.5), (0, -0.5));
    /// assert_eq!(axis.locate(3.5), (2, 1.5));
    /// ```
    ///
    /// A NaN coordinate resolves to cell 0 with a NaN offset.
    #[inline]
    pub fn locate(&self, coord: T) -> (usize, T) {
        let index = (coord - self.min) / self.spacing;
        if !(index >= T::zero()) {
            (0, index)
        } else if index >= self.last {
            (self.bound - 1, index - self.last)
        } else {
            let cell = index.floor();
            (cell.to_usize().unwrap_or(0), index - cell)
        }
    }

    /// Clamp a neighbour index to the last sample on the axis.
    #[inline]
    pub(crate) fn clamp_index(&self, index: usize) -> usize {
        index.min(self.bound - 1)
    }
}

/// Configuration for a regular 2D grid.
///
/// # Example
///
/// ```
/// use gridfield_core::types::{GridAxis, GridSpec};
///
/// let spec = GridSpec::new(GridAxis::new(4, 0.0_f64, 0.25), GridAxis::new(3, 10.0, 5.0));
/// assert!(spec.validate().is_ok());
/// assert_eq!(spec.quantity(), Some(12));
/// assert_eq!(spec.node_index(1, 2), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec<T: Float> {
    /// Column axis (fastest varying in the sample buffer).
    pub x: GridAxis<T>,

    /// Row axis.
    pub y: GridAxis<T>,
}

impl<T: Float> GridSpec<T> {
    /// Create a grid description from its two axes.
    pub fn new(x: GridAxis<T>, y: GridAxis<T>) -> Self {
        Self { x, y }
    }

    /// Total number of samples, `x.bound * y.bound`.
    ///
    /// Returns `None` if the product overflows `usize`.
    pub fn quantity(&self) -> Option<usize> {
        self.x.bound.checked_mul(self.y.bound)
    }

    /// Row-major buffer offset of node `(ix, iy)`: `ix + x.bound * iy`.
    #[inline]
    pub fn node_index(&self, ix: usize, iy: usize) -> usize {
        ix + self.x.bound * iy
    }

    /// Check both axes and the total grid size.
    ///
    /// # Errors
    ///
    /// Any error from [`GridAxis::validate`], or `InvalidInput` if the
    /// sample count overflows `usize`.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        self.resolve().map(|_| ())
    }

    /// Validate and return both resolved axes with the sample count.
    pub(crate) fn resolve(
        &self,
    ) -> Result<(UniformAxis<T>, UniformAxis<T>, usize), InterpolationError> {
        let x = self.x.validate("x")?;
        let y = self.y.validate("y")?;
        let quantity = self.quantity().ok_or_else(|| {
            InterpolationError::InvalidInput(format!(
                "grid of {} x {} samples overflows usize",
                self.x.bound, self.y.bound
            ))
        })?;
        Ok((x, y, quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Axis Validation Tests
    // ========================================

    #[test]
    fn test_validate_minimum_axis() {
        let axis = GridAxis::new(2, 0.0_f64, 1.0).validate("x").unwrap();
        assert_eq!(axis.bound(), 2);
        assert_eq!(axis.min(), 0.0);
        assert_eq!(axis.max(), 1.0);
        assert_eq!(axis.spacing(), 1.0);
        assert_eq!(axis.inv_spacing(), 1.0);
    }

    #[test]
    fn test_validate_derived_values() {
        let axis = GridAxis::new(11, -2.0_f64, 0.4).validate("y").unwrap();
        assert_relative_eq!(axis.max(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(axis.inv_spacing(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_validate_insufficient_bound() {
        for bound in [0, 1] {
            let result = GridAxis::new(bound, 0.0_f64, 1.0).validate("y");
            match result.unwrap_err() {
                InterpolationError::InsufficientData { axis, got, need } => {
                    assert_eq!(axis, "y");
                    assert_eq!(got, bound);
                    assert_eq!(need, 2);
                }
                other => panic!("Expected InsufficientData error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_non_positive_spacing() {
        for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = GridAxis::new(3, 0.0_f64, spacing).validate("x");
            match result.unwrap_err() {
                InterpolationError::InvalidSpacing { axis, .. } => assert_eq!(axis, "x"),
                other => panic!("Expected InvalidSpacing error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_non_finite_origin() {
        let result = GridAxis::new(3, f64::NEG_INFINITY, 1.0).validate("x");
        assert!(matches!(
            result,
            Err(InterpolationError::InvalidOrigin { axis: "x", .. })
        ));
    }

    // ========================================
    // Cell Location Tests
    // ========================================

    #[test]
    fn test_locate_interior() {
        let axis = GridAxis::new(4, 1.0_f64, 0.5).validate("x").unwrap();
        let (cell, frac) = axis.locate(1.75);
        assert_eq!(cell, 1);
        assert_relative_eq!(frac, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_locate_on_nodes() {
        let axis = GridAxis::new(4, 0.0_f64, 0.5).validate("x").unwrap();
        for i in 0..4 {
            let (cell, frac) = axis.locate(i as f64 * 0.5);
            assert_eq!(cell, i);
            assert_eq!(frac, 0.0);
        }
    }

    #[test]
    fn test_locate_below_range_keeps_negative_fraction() {
        let axis = GridAxis::new(3, 0.0_f64, 2.0).validate("x").unwrap();
        // index = -1.5 / 2 = -0.75
        assert_eq!(axis.locate(-1.5), (0, -0.75));
        // index = -7 / 2 = -3.5
        assert_eq!(axis.locate(-7.0), (0, -3.5));
    }

    #[test]
    fn test_locate_above_range_measures_from_last_node() {
        let axis = GridAxis::new(3, 0.0_f64, 1.0).validate("x").unwrap();
        assert_eq!(axis.locate(2.0), (2, 0.0));
        assert_eq!(axis.locate(2.25), (2, 0.25));
        assert_eq!(axis.locate(5.0), (2, 3.0));
    }

    #[test]
    fn test_locate_non_finite() {
        let axis = GridAxis::new(3, 0.0_f64, 1.0).validate("x").unwrap();
        let (cell, frac) = axis.locate(f64::NAN);
        assert_eq!(cell, 0);
        assert!(frac.is_nan());
        assert_eq!(axis.locate(f64::INFINITY).0, 2);
        assert_eq!(axis.locate(f64::NEG_INFINITY).0, 0);
    }

    #[test]
    fn test_clamp_index() {
        let axis = GridAxis::new(3, 0.0_f64, 1.0).validate("x").unwrap();
        assert_eq!(axis.clamp_index(1), 1);
        assert_eq!(axis.clamp_index(2), 2);
        assert_eq!(axis.clamp_index(3), 2);
    }

    // ========================================
    // Grid Spec Tests
    // ========================================

    #[test]
    fn test_spec_quantity_and_node_index() {
        let spec = GridSpec::new(GridAxis::new(3, 0.0_f64, 1.0), GridAxis::new(2, 0.0, 1.0));
        assert_eq!(spec.quantity(), Some(6));
        assert_eq!(spec.node_index(0, 0), 0);
        assert_eq!(spec.node_index(2, 0), 2);
        assert_eq!(spec.node_index(0, 1), 3);
        assert_eq!(spec.node_index(2, 1), 5);
    }

    #[test]
    fn test_spec_validate_reports_y_axis() {
        let spec = GridSpec::new(GridAxis::new(3, 0.0_f64, 1.0), GridAxis::new(3, 0.0, 0.0));
        assert!(matches!(
            spec.validate(),
            Err(InterpolationError::InvalidSpacing { axis: "y", .. })
        ));
    }

    #[test]
    fn test_spec_quantity_overflow() {
        let spec = GridSpec::new(
            GridAxis::new(usize::MAX, 0.0_f64, 1.0),
            GridAxis::new(2, 0.0, 1.0),
        );
        assert_eq!(spec.quantity(), None);
        assert!(matches!(
            spec.validate(),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_spec_json_round_trip() {
        let json = r#"{"x":{"bound":4,"min":-1.0,"spacing":0.5},"y":{"bound":2,"min":0.0,"spacing":2.0}}"#;
        let spec: GridSpec<f64> = serde_json::from_str(json).unwrap();
        assert_eq!(spec.x, GridAxis::new(4, -1.0, 0.5));
        assert_eq!(spec.y, GridAxis::new(2, 0.0, 2.0));
        assert!(spec.validate().is_ok());

        let back: GridSpec<f64> = serde_json::from_str(&serde_json::to_string(&spec).unwrap()).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_f32_axis() {
        let axis = GridAxis::new(3, 0.0_f32, 0.5).validate("x").unwrap();
        assert_eq!(axis.max(), 1.0_f32);
        assert_eq!(axis.locate(0.75_f32), (1, 0.5_f32));
    }
}
