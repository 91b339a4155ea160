//! Linear blend matrix and per-axis monomial bases.
//!
//! Along one axis a first-degree interpolant is written in the monomial
//! basis `U = [1, t]`. The blend matrix
//!
//! ```text
//! M = | 1  -1 |
//!     | 0   1 |
//! ```
//!
//! maps it to the blend weights `M·U = [1 - t, t]` of the two neighbouring
//! samples. Differentiating the basis instead (`U' = [0, 1]`) yields the
//! derivative weights `[-1, 1]` through the same matrix.

use num_traits::Float;

/// The blend matrix `M`.
#[inline(always)]
pub(crate) fn blend_matrix<T: Float>() -> [[T; 2]; 2] {
    [[T::one(), -T::one()], [T::zero(), T::one()]]
}

/// Compute `M·basis`.
#[inline]
pub(crate) fn blend<T: Float>(basis: [T; 2]) -> [T; 2] {
    let m = blend_matrix::<T>();
    let mut weights = [T::zero(); 2];
    for (row, weight) in weights.iter_mut().enumerate() {
        for (col, &b) in basis.iter().enumerate() {
            *weight = *weight + m[row][col] * b;
        }
    }
    weights
}

/// Monomial basis and chain-rule multiplier for one axis.
///
/// Order 0 gives `[1, t]` with multiplier 1, order 1 gives `[0, 1]` with
/// multiplier `inv_spacing`. Any higher order returns `None`: the
/// interpolant is piecewise linear, so those derivatives vanish.
#[inline]
pub(crate) fn axis_basis<T: Float>(order: u32, t: T, inv_spacing: T) -> Option<([T; 2], T)> {
    match order {
        0 => Some(([T::one(), t], T::one())),
        1 => Some(([T::zero(), T::one()], inv_spacing)),
        _ => None,
    }
}
