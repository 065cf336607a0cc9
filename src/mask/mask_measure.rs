use super::BinaryMask;
use crate::lookup::{BoundaryMeasureTable, Spacing};
use crate::math::{Point, Real, DIM, NUM_CODES};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl BinaryMask {
    /// Counts the neighborhoods of each code over this mask.
    ///
    /// The mask is padded with one layer of outside samples on each side, so every
    /// neighborhood touching the mask is counted: along the axis `k`, neighborhood
    /// origins range from `-1` to `shape[k] - 1`. This ensures the boundary of objects
    /// touching the border of the mask is closed.
    pub fn code_histogram(&self) -> [usize; NUM_CODES] {
        let first_axis = -1..self.shape()[0] as isize;

        #[cfg(not(feature = "parallel"))]
        let histogram = first_axis
            .map(|i| self.slab_histogram(i))
            .fold([0; NUM_CODES], merge_histograms);
        #[cfg(feature = "parallel")]
        let histogram = first_axis
            .into_par_iter()
            .map(|i| self.slab_histogram(i))
            .reduce(|| [0; NUM_CODES], merge_histograms);

        log::debug!(
            "Computed the neighborhood histogram of {} windows over a mask of shape {:?}.",
            histogram.iter().sum::<usize>(),
            self.shape().as_slice()
        );

        histogram
    }

    /// The histogram of the neighborhoods with origins having the first coordinate `i`.
    fn slab_histogram(&self, i: isize) -> [usize; NUM_CODES] {
        let mut histogram = [0; NUM_CODES];
        // Number of window origins along each axis, once the mask is padded.
        let num_origins = self.shape().map(|e| e + 1);
        let slab_len: usize = num_origins.iter().skip(1).product();

        for mut j in 0..slab_len {
            let mut origin = Point::origin();
            origin[0] = i;

            for k in (1..DIM).rev() {
                origin[k] = (j % num_origins[k]) as isize - 1;
                j /= num_origins[k];
            }

            histogram[self.neighborhood_code_at(origin).index()] += 1;
        }

        histogram
    }
}

fn merge_histograms(
    mut acc: [usize; NUM_CODES],
    histogram: [usize; NUM_CODES],
) -> [usize; NUM_CODES] {
    for (a, h) in acc.iter_mut().zip(histogram.iter()) {
        *a += *h;
    }

    acc
}

/// The total boundary measure of the object segmented by `mask`, with voxels of size `spacing`.
///
/// This is the surface area of the object in 3D and the length of its contour in 2D.
pub fn boundary_measure(mask: &BinaryMask, spacing: &Spacing) -> Real {
    BoundaryMeasureTable::new(*spacing).total_measure(&mask.code_histogram())
}

/// The area of the surface of the object segmented by `mask`, with voxels of size `spacing`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use surfel3d::lookup::Spacing;
/// use surfel3d::mask::{total_surface_area, BinaryMask};
/// use surfel3d::na::Vector3;
///
/// // The marching-cubes surface of a single voxel is an octahedron.
/// let mask = BinaryMask::from_fn(Vector3::new(1, 1, 1), |_| true);
/// let area = total_surface_area(&mask, &Spacing::unit());
/// assert!((area - 3.0f64.sqrt()).abs() < 1.0e-9);
/// # }
/// ```
#[cfg(feature = "dim3")]
pub fn total_surface_area(mask: &BinaryMask, spacing: &Spacing) -> Real {
    boundary_measure(mask, spacing)
}

/// The length of the contour of the object segmented by `mask`, with pixels of size `spacing`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim2")] {
/// use surfel2d::lookup::Spacing;
/// use surfel2d::mask::{total_contour_length, BinaryMask};
/// use surfel2d::na::Vector2;
///
/// // The marching-squares contour of a single pixel is a diamond.
/// let mask = BinaryMask::from_fn(Vector2::new(1, 1), |_| true);
/// let length = total_contour_length(&mask, &Spacing::unit());
/// assert!((length - 2.0 * 2.0f64.sqrt()).abs() < 1.0e-9);
/// # }
/// ```
#[cfg(feature = "dim2")]
pub fn total_contour_length(mask: &BinaryMask, spacing: &Spacing) -> Real {
    boundary_measure(mask, spacing)
}
