use crate::error::SpacingError;
use crate::math::{Real, Vector, DIM};

/// The physical size of a voxel (or pixel) along each axis.
///
/// A `Spacing` is always valid: each component is finite and strictly positive, and
/// the boundary measures of a voxel of this size are finite. Use [`Spacing::new`] or
/// [`Spacing::from_slice`] to validate raw values, typically read from the metadata of
/// a medical image. Deserialization goes through the same validation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(try_from = "RawSpacing"))]
pub struct Spacing {
    extents: Vector<Real>,
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct RawSpacing {
    extents: Vector<Real>,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<RawSpacing> for Spacing {
    type Error = SpacingError;

    fn try_from(raw: RawSpacing) -> Result<Self, Self::Error> {
        Self::new(raw.extents)
    }
}

/// The per-axis factors applied to the boundary measures of a unit voxel.
#[cfg(feature = "dim3")]
fn measure_scale(extents: &Vector<Real>) -> Vector<Real> {
    Vector::new(
        extents.y * extents.z,
        extents.x * extents.z,
        extents.x * extents.y,
    )
}

/// The per-axis factors applied to the boundary measures of a unit pixel.
#[cfg(feature = "dim2")]
fn measure_scale(extents: &Vector<Real>) -> Vector<Real> {
    *extents
}

impl Spacing {
    /// Creates a spacing from its per-axis extents.
    ///
    /// Every extent must be finite and strictly positive. The extents must also be small
    /// enough for the squared norm of [`Spacing::measure_scale`] to be finite, so that
    /// every table generated from this spacing holds finite values.
    pub fn new(extents: Vector<Real>) -> Result<Self, SpacingError> {
        for (axis, value) in extents.iter().enumerate() {
            if !value.is_finite() {
                return Err(SpacingError::NonFinite {
                    axis,
                    value: *value,
                });
            }

            if *value <= 0.0 {
                return Err(SpacingError::NonPositive {
                    axis,
                    value: *value,
                });
            }
        }

        if !measure_scale(&extents).norm_squared().is_finite() {
            return Err(SpacingError::Overflow {
                extents: core::array::from_fn(|i| extents[i]),
            });
        }

        Ok(Self { extents })
    }

    /// Creates a spacing from a slice with exactly one component per axis.
    pub fn from_slice(components: &[Real]) -> Result<Self, SpacingError> {
        if components.len() != DIM {
            return Err(SpacingError::WrongArity {
                expected: DIM,
                found: components.len(),
            });
        }

        Self::new(Vector::from_column_slice(components))
    }

    /// Creates a spacing with the same extent along every axis.
    pub fn isotropic(extent: Real) -> Result<Self, SpacingError> {
        Self::new(Vector::repeat(extent))
    }

    /// The unit spacing, for which all the lookup tables hold their unscaled values.
    pub fn unit() -> Self {
        Self {
            extents: Vector::repeat(1.0),
        }
    }

    /// The per-axis extents of a voxel.
    #[inline]
    pub fn extents(&self) -> &Vector<Real> {
        &self.extents
    }

    /// The per-axis factors applied to the boundary measures of a unit voxel.
    ///
    /// In 3D, the component of a surfel normal along an axis measures an area in the
    /// plane of the two other axes: it scales with `(sy * sz, sx * sz, sx * sy)`. In 2D,
    /// contour segments scale with the extents themselves.
    #[inline]
    pub fn measure_scale(&self) -> Vector<Real> {
        measure_scale(&self.extents)
    }

    /// Is the spacing the same along every axis?
    pub fn is_isotropic(&self) -> bool {
        self.extents.iter().all(|e| *e == self.extents[0])
    }

    /// This spacing with every extent multiplied by `factor`.
    pub fn scaled(&self, factor: Real) -> Result<Self, SpacingError> {
        Self::new(self.extents * factor)
    }

    /// The spacing along the first, vertical, axis.
    #[cfg(feature = "dim2")]
    #[inline]
    pub fn vertical(&self) -> Real {
        self.extents.x
    }

    /// The spacing along the second, horizontal, axis.
    #[cfg(feature = "dim2")]
    #[inline]
    pub fn horizontal(&self) -> Real {
        self.extents.y
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::unit()
    }
}

impl TryFrom<Vector<Real>> for Spacing {
    type Error = SpacingError;

    fn try_from(extents: Vector<Real>) -> Result<Self, Self::Error> {
        Self::new(extents)
    }
}

impl TryFrom<&[Real]> for Spacing {
    type Error = SpacingError;

    fn try_from(components: &[Real]) -> Result<Self, Self::Error> {
        Self::from_slice(components)
    }
}

impl From<Spacing> for Vector<Real> {
    fn from(spacing: Spacing) -> Self {
        spacing.extents
    }
}
