use crate::error::{MaskError, SurfelError};
use crate::math::{Point, Vector, DIM, NUM_CORNERS};
use crate::neighborhood::{corner_offset, NeighborhoodCode};
use alloc::vec::Vec;

/// A dense binary segmentation mask.
///
/// Samples are stored in row-major order: the first axis varies slowest, matching the
/// corner order of [`NeighborhoodCode`]. Any sample outside of the mask domain is
/// considered outside of the segmented object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(try_from = "RawBinaryMask"))]
pub struct BinaryMask {
    shape: Vector<usize>,
    data: Vec<bool>,
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct RawBinaryMask {
    shape: Vector<usize>,
    data: Vec<bool>,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<RawBinaryMask> for BinaryMask {
    type Error = SurfelError;

    fn try_from(raw: RawBinaryMask) -> Result<Self, Self::Error> {
        Self::new(raw.shape, raw.data)
    }
}

/// The number of samples of a mask of the given shape, if it fits in a `usize`.
fn num_samples(shape: &Vector<usize>) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, e| acc.checked_mul(*e))
}

/// The row-major grid coordinates of `index`, assuming `index < num_samples(shape)`.
fn unravel_index(shape: &Vector<usize>, mut index: usize) -> Point<usize> {
    let mut point = Point::origin();

    for k in (0..DIM).rev() {
        point[k] = index % shape[k];
        index /= shape[k];
    }

    point
}

impl BinaryMask {
    /// Creates a mask from its shape and its row-major samples.
    ///
    /// Fails with [`SurfelError::InvalidMask`] if `data` doesn’t contain exactly one
    /// sample per cell of `shape`, or if that number of samples overflows a `usize`.
    pub fn new(shape: Vector<usize>, data: Vec<bool>) -> Result<Self, SurfelError> {
        let expected = num_samples(&shape).ok_or_else(|| MaskError::TooLarge {
            shape: shape.as_slice().to_vec(),
        })?;

        if data.len() != expected {
            return Err(MaskError::WrongLength {
                shape: shape.as_slice().to_vec(),
                expected,
                found: data.len(),
            }
            .into());
        }

        Ok(Self { shape, data })
    }

    /// Creates a mask with all its samples outside of the object.
    ///
    /// # Panics
    ///
    /// Panics if the number of samples of `shape` overflows a `usize`.
    pub fn outside(shape: Vector<usize>) -> Self {
        Self::from_fn(shape, |_| false)
    }

    /// Creates a mask by evaluating `f` on each of its samples.
    ///
    /// # Panics
    ///
    /// Panics if the number of samples of `shape` overflows a `usize`.
    pub fn from_fn(shape: Vector<usize>, mut f: impl FnMut(Point<usize>) -> bool) -> Self {
        let len = num_samples(&shape)
            .unwrap_or_else(|| panic!("A mask of shape {shape:?} has too many samples."));
        let data = (0..len).map(|i| f(unravel_index(&shape, i))).collect();
        Self { shape, data }
    }

    /// The number of samples along each axis.
    #[inline]
    pub fn shape(&self) -> &Vector<usize> {
        &self.shape
    }

    /// The row-major samples of this mask.
    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// The total number of samples of this mask.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Does this mask have no sample at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of samples inside of the object.
    pub fn num_inside(&self) -> usize {
        self.data.iter().filter(|s| **s).count()
    }

    /// The row-major index of the sample at `point`, if it lies in the mask domain.
    pub fn linear_index(&self, point: Point<usize>) -> Option<usize> {
        let mut index = 0;

        for k in 0..DIM {
            if point[k] >= self.shape[k] {
                return None;
            }

            index = index * self.shape[k] + point[k];
        }

        Some(index)
    }

    /// The grid coordinates of the sample with the given row-major index.
    ///
    /// Returns `None` if `index >= self.len()`, which is always the case when an axis of
    /// the mask has no sample.
    pub fn point_at(&self, index: usize) -> Option<Point<usize>> {
        (index < self.data.len()).then(|| unravel_index(&self.shape, index))
    }

    /// Sets the sample at `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` lies outside of the mask domain.
    pub fn set(&mut self, point: Point<usize>, inside: bool) {
        let index = self.linear_index(point).unwrap_or_else(|| {
            panic!(
                "Point {point:?} out of bounds of a mask of shape {:?}.",
                self.shape
            )
        });
        self.data[index] = inside;
    }

    /// Is the sample at `point` inside of the object?
    ///
    /// Points outside of the mask domain, including negative coordinates, are outside.
    pub fn is_inside(&self, point: Point<isize>) -> bool {
        let mut index = 0;

        for k in 0..DIM {
            if point[k] < 0 || point[k] as usize >= self.shape[k] {
                return false;
            }

            index = index * self.shape[k] + point[k] as usize;
        }

        self.data[index]
    }

    /// The code of the neighborhood whose lowest corner is `origin`.
    ///
    /// The neighborhood covers the samples from `origin` to `origin + 1` (inclusive)
    /// along every axis.
    pub fn neighborhood_code_at(&self, origin: Point<isize>) -> NeighborhoodCode {
        let mut corners = [false; NUM_CORNERS];

        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = self.is_inside(origin + corner_offset(i).map(|e| e as isize));
        }

        NeighborhoodCode::from_corners(&corners)
    }
}
