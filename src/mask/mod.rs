//! Dense binary masks and their total boundary measure.

pub use self::binary_mask::BinaryMask;
pub use self::mask_measure::boundary_measure;
#[cfg(feature = "dim2")]
pub use self::mask_measure::total_contour_length;
#[cfg(feature = "dim3")]
pub use self::mask_measure::total_surface_area;

mod binary_mask;
mod mask_measure;
