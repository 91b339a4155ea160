//! # gridfield_core: Interpolated Scalar Fields on Regular Grids
//!
//! gridfield_core turns samples on a uniformly spaced 2D grid into a
//! continuous field that can be queried anywhere:
//! - Grid description and validation (`types::grid`)
//! - Bilinear value and partial-derivative evaluation (`math::interpolators`)
//! - Error types: `InterpolationError` (`types::error`)
//!
//! ## Borrowed Samples
//!
//! Interpolants borrow the caller's sample buffer for their whole lifetime
//! and never copy or mutate it. Once built they are immutable, `Send` and
//! `Sync`, and every evaluation runs in constant time.
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - tracing: Construction diagnostics
//! - serde: Serialisation of grid descriptions (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use gridfield_core::math::interpolators::{BilinearGrid, GridInterpolator};
//! use gridfield_core::types::{GridAxis, GridSpec};
//!
//! // Height field sampled on a 3 x 2 grid, row-major with x fastest
//! let heights = [0.0, 1.0, 4.0, 2.0, 3.0, 6.0];
//! let spec = GridSpec::new(GridAxis::new(3, 0.0, 0.5), GridAxis::new(2, 0.0, 1.0));
//! let field = BilinearGrid::from_spec(&spec, &heights).unwrap();
//!
//! assert_eq!(field.evaluate(0.25, 0.0), 0.5);
//! assert_eq!(field.evaluate_derivative(0, 1, 0.25, 0.5), 2.0);
//! # assert_eq!(field.quantity(), 6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `GridAxis` and `GridSpec`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use math::interpolators::{BilinearGrid, GridInterpolator};
pub use num_traits::Float;
pub use types::{GridAxis, GridSpec, InterpolationError};
