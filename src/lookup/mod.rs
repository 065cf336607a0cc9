//! Lookup tables mapping neighborhood codes to physical boundary measures.

pub use self::boundary_measure_table::BoundaryMeasureTable;
pub use self::spacing::Spacing;

#[cfg(feature = "dim2")]
pub use self::contour_length2d::{
    contour_segment, generate_contour_length_table, try_generate_contour_length_table,
    ContourSegment, NEIGHBOR_CODE_TO_CONTOUR_SEGMENT,
};

#[cfg(feature = "dim3")]
pub use self::surface_area3d::{
    generate_surface_area_table, surfel_normals, try_generate_surface_area_table,
};
#[cfg(feature = "dim3")]
pub use self::surfel_normals3d::NEIGHBOR_CODE_TO_NORMALS;

mod boundary_measure_table;
#[cfg(feature = "dim2")]
mod contour_length2d;
mod spacing;
#[cfg(feature = "dim3")]
mod surface_area3d;
#[cfg(feature = "dim3")]
mod surfel_normals3d;
