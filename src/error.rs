//! Errors reported when validating spacings, neighborhoods, and masks.

use crate::math::{Real, DIM};
use alloc::vec::Vec;

/// Error returned by the fallible constructors and table generators of this crate.
///
/// Every operation of this crate is a pure computation: an error always means that
/// the caller violated an input contract. Nothing is retried or silently corrected,
/// and no partially-filled table is ever returned.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use surfel3d::error::{SpacingError, SurfelError};
/// use surfel3d::lookup::try_generate_surface_area_table;
///
/// match try_generate_surface_area_table(&[1.0, 0.0, 1.0]) {
///     Err(SurfelError::InvalidSpacing(SpacingError::NonPositive { axis, .. })) => {
///         assert_eq!(axis, 1);
///     }
///     _ => unreachable!(),
/// }
/// # }
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SurfelError {
    /// The voxel spacing has the wrong number of components, a component that
    /// isn't finite and strictly positive, or extents too large to be measured.
    #[error("invalid voxel spacing: {0}")]
    InvalidSpacing(#[from] SpacingError),
    /// The neighborhood given to the encoder doesn't have the `2×…×2` shape
    /// or contains values other than `0` and `1`.
    #[error("invalid neighborhood: {0}")]
    InvalidNeighborhood(#[from] NeighborhoodError),
    /// The samples given to a mask don't match its shape.
    #[error("invalid mask: {0}")]
    InvalidMask(#[from] MaskError),
}

/// Error describing why a voxel spacing was rejected.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SpacingError {
    /// The spacing doesn't have one component per axis.
    #[error("expected {expected} spacing components, found {found}")]
    WrongArity {
        /// The dimension of the space.
        expected: usize,
        /// The number of components given.
        found: usize,
    },
    /// A spacing component is NaN or infinite.
    #[error("the spacing along axis {axis} is not finite: {value}")]
    NonFinite {
        /// The offending axis.
        axis: usize,
        /// The offending value.
        value: Real,
    },
    /// A spacing component is zero or negative.
    #[error("the spacing along axis {axis} must be strictly positive, found {value}")]
    NonPositive {
        /// The offending axis.
        axis: usize,
        /// The offending value.
        value: Real,
    },
    /// The spacing is so large that the boundary measure of a single voxel isn't
    /// representable.
    #[error("the boundary measures of voxels of size {extents:?} overflow")]
    Overflow {
        /// The extents of the rejected spacing.
        extents: [Real; DIM],
    },
}

/// Error describing why a neighborhood could not be encoded.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum NeighborhoodError {
    /// The neighborhood isn't exactly `2` samples wide along every axis.
    #[error("expected a neighborhood of shape {expected:?}, found {found:?}")]
    WrongShape {
        /// The only accepted shape.
        expected: [usize; DIM],
        /// The shape given.
        found: Vec<usize>,
    },
    /// The number of values doesn't match the neighborhood shape.
    #[error("a neighborhood holds {expected} values, found {found}")]
    WrongLength {
        /// The number of corners of a neighborhood.
        expected: usize,
        /// The number of values given.
        found: usize,
    },
    /// A value is neither `0` nor `1`.
    #[error("neighborhood value {value} at index {index} is neither 0 nor 1")]
    NonBinaryValue {
        /// The linear (row-major) index of the value.
        index: usize,
        /// The offending value.
        value: u8,
    },
}

/// Error describing why a binary mask could not be built.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum MaskError {
    /// The number of samples doesn't match the shape of the mask.
    #[error("a mask of shape {shape:?} needs {expected} samples, found {found}")]
    WrongLength {
        /// The shape of the mask.
        shape: Vec<usize>,
        /// The number of samples implied by the shape.
        expected: usize,
        /// The number of samples actually given.
        found: usize,
    },
    /// The number of samples implied by the shape doesn't fit in a `usize`.
    #[error("a mask of shape {shape:?} has too many samples")]
    TooLarge {
        /// The shape of the mask.
        shape: Vec<usize>,
    },
}
