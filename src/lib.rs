/*!
surfel
========

**surfel** computes the lookup tables used by surface-distance metrics to turn
binary voxel neighborhoods into physical boundary measures: surface area in 3D,
contour length in 2D.

Every 2×2 (2D) or 2×2×2 (3D) neighborhood of a segmentation mask is encoded
into a [`NeighborhoodCode`](neighborhood::NeighborhoodCode). The tables map each
code to the area (or length) of the marching-cubes (or marching-squares) boundary
crossing that neighborhood, rescaled by the anisotropic voxel spacing.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "dim2", feature = "dim3"))]
core::compile_error!(
    "The `dim2` and `dim3` features are mutually exclusive. Use `surfel2d` or `surfel3d`."
);

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod error;
pub mod lookup;
pub mod mask;
pub mod neighborhood;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The number of voxels in a neighborhood (the corners of a 2×2×2 cell).
    pub const NUM_CORNERS: usize = 1 << DIM;

    /// The number of distinct neighborhood codes.
    pub const NUM_CODES: usize = 1 << NUM_CORNERS;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim2")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Vector2};

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The number of pixels in a neighborhood (the corners of a 2×2 cell).
    pub const NUM_CORNERS: usize = 1 << DIM;

    /// The number of distinct neighborhood codes.
    pub const NUM_CODES: usize = 1 << NUM_CORNERS;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}

// A neighborhood code must fit in the `u8` backing `NeighborhoodCode`.
static_assertions::const_assert!(math::NUM_CORNERS <= 8);
