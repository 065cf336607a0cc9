use super::Spacing;
use crate::error::SurfelError;
use crate::math::{Real, NUM_CODES};
use crate::neighborhood::NeighborhoodCode;
use approx::{AbsDiffEq, RelativeEq};
use core::ops::Index;

/// The boundary measure of every neighborhood code for a given voxel spacing.
///
/// In 3D, the boundary measure of a code is the area of the surface crossing the 2×2×2
/// neighborhood (see [`generate_surface_area_table`](super::generate_surface_area_table)).
/// In 2D, it is the length of the contour crossing the 2×2 neighborhood
/// (see [`generate_contour_length_table`](super::generate_contour_length_table)).
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryMeasureTable {
    spacing: Spacing,
    values: [Real; NUM_CODES],
}

impl BoundaryMeasureTable {
    /// Computes the boundary measure table for voxels of size `spacing`.
    pub fn new(spacing: Spacing) -> Self {
        #[cfg(feature = "dim2")]
        let values = super::generate_contour_length_table(&spacing);
        #[cfg(feature = "dim3")]
        let values = super::generate_surface_area_table(&spacing);

        Self { spacing, values }
    }

    /// Computes the boundary measure table from raw spacing components.
    pub fn try_new(spacing: &[Real]) -> Result<Self, SurfelError> {
        Ok(Self::new(Spacing::from_slice(spacing)?))
    }

    /// The spacing this table was computed for.
    #[inline]
    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// The boundary measure of each code, indexed by [`NeighborhoodCode::index`].
    #[inline]
    pub fn values(&self) -> &[Real; NUM_CODES] {
        &self.values
    }

    /// The boundary measure of the neighborhood with the given code.
    #[inline]
    pub fn measure(&self, code: NeighborhoodCode) -> Real {
        self.values[code.index()]
    }

    /// The total boundary measure of a set of neighborhoods, given the number of
    /// neighborhoods having each code.
    pub fn total_measure(&self, histogram: &[usize; NUM_CODES]) -> Real {
        self.values
            .iter()
            .zip(histogram.iter())
            .filter(|(_, count)| **count != 0)
            .map(|(value, count)| *value * *count as Real)
            .sum()
    }

    /// Consumes this table, returning its values.
    pub fn into_values(self) -> [Real; NUM_CODES] {
        self.values
    }
}

impl Index<NeighborhoodCode> for BoundaryMeasureTable {
    type Output = Real;

    #[inline]
    fn index(&self, code: NeighborhoodCode) -> &Real {
        &self.values[code.index()]
    }
}

impl AbsDiffEq for BoundaryMeasureTable {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for BoundaryMeasureTable {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
