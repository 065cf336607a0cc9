use super::{Spacing, NEIGHBOR_CODE_TO_NORMALS};
use crate::error::SurfelError;
use crate::math::{Real, Vector, NUM_CODES};
use crate::neighborhood::NeighborhoodCode;

/// The normals of the surfels crossing the neighborhood with the given code, for a unit
/// voxel spacing.
pub fn surfel_normals(code: NeighborhoodCode) -> impl ExactSizeIterator<Item = Vector<Real>> {
    NEIGHBOR_CODE_TO_NORMALS[code.index()]
        .iter()
        .map(|n| Vector::from(*n))
}

/// Computes the area of the surface crossing each 2×2×2 neighborhood.
///
/// The entry `i` of the returned table is the physical area of the marching-cubes surface
/// crossing the neighborhood with code `i`, for voxels of size `spacing`.
///
/// Each surfel normal `n` is rescaled to `(n.x * sy * sz, n.y * sx * sz, n.z * sx * sy)`:
/// each component of a normal measures the projection of the surfel on the plane orthogonal
/// to its axis, so it scales with the extents of the two other axes. The norm of the
/// rescaled normal is the physical area of the surfel.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use surfel3d::lookup::{generate_surface_area_table, Spacing};
///
/// let spacing = Spacing::from_slice(&[1.0, 0.5, 0.5]).unwrap();
/// let areas = generate_surface_area_table(&spacing);
/// assert_eq!(areas.len(), 256);
/// assert_eq!(areas[0], 0.0);
/// assert_eq!(areas[255], 0.0);
/// # }
/// ```
pub fn generate_surface_area_table(spacing: &Spacing) -> [Real; NUM_CODES] {
    let scale = spacing.measure_scale();
    let mut table = [0.0; NUM_CODES];

    for (area, normals) in table.iter_mut().zip(NEIGHBOR_CODE_TO_NORMALS.iter()) {
        *area = normals
            .iter()
            .map(|n| Vector::from(*n).component_mul(&scale).norm())
            .sum();
    }

    log::debug!(
        "Generated the surface-area table for the voxel spacing {:?}.",
        spacing.extents()
    );
    table
}

/// Computes the surface-area table from raw spacing components.
///
/// Fails with [`SurfelError::InvalidSpacing`] if `spacing` isn't a valid [`Spacing`]: three
/// finite strictly positive components whose surface areas don't overflow. See
/// [`generate_surface_area_table`].
pub fn try_generate_surface_area_table(
    spacing: &[Real],
) -> Result<[Real; NUM_CODES], SurfelError> {
    let spacing = Spacing::from_slice(spacing)?;
    Ok(generate_surface_area_table(&spacing))
}
