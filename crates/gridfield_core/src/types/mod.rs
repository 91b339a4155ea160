//! Core grid description and error types.
//!
//! This module provides:
//! - `grid`: Regular grid description (`GridAxis`, `GridSpec`) and validated axes
//! - `error`: Structured error type for interpolant construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`GridAxis`], [`GridSpec`], [`UniformAxis`] from `grid`
//! - [`InterpolationError`] from `error`

pub mod error;
pub mod grid;

// Re-export commonly used types at module level
pub use error::InterpolationError;
pub use grid::{GridAxis, GridSpec, UniformAxis, MIN_BOUND};
