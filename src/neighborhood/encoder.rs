use super::NeighborhoodCode;
use crate::error::{NeighborhoodError, SurfelError};
use crate::math::{Vector, DIM, NUM_CORNERS};

/// The weight of each corner of a neighborhood, in row-major order.
///
/// The code of a neighborhood is the sum of the weights of its inside corners.
#[cfg(feature = "dim2")]
pub const ENCODE_NEIGHBORHOOD_KERNEL: [u8; NUM_CORNERS] = [8, 4, 2, 1];

/// The weight of each corner of a neighborhood, in row-major order.
///
/// The code of a neighborhood is the sum of the weights of its inside corners.
#[cfg(feature = "dim3")]
pub const ENCODE_NEIGHBORHOOD_KERNEL: [u8; NUM_CORNERS] = [128, 64, 32, 16, 8, 4, 2, 1];

/// The shape of the only neighborhoods accepted by the encoder.
pub const NEIGHBORHOOD_SHAPE: [usize; DIM] = [2; DIM];

/// The offset, relative to the neighborhood origin, of its `i`-th corner.
///
/// Corners are numbered in row-major order: the first axis varies slowest.
///
/// # Panics
///
/// Panics if `i >= NUM_CORNERS`.
pub fn corner_offset(i: usize) -> Vector<usize> {
    assert!(i < NUM_CORNERS, "Corner index out of bounds.");
    Vector::from_fn(|k, _| (i >> (DIM - 1 - k)) & 1)
}

/// Encodes a neighborhood given as a row-major array of `0`/`1` values.
///
/// `shape` must be exactly [`NEIGHBORHOOD_SHAPE`] and `values` must contain
/// exactly one value per corner, each of them being `0` (outside) or `1` (inside).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim2")] {
/// use surfel2d::neighborhood::encode_neighborhood;
///
/// let code = encode_neighborhood(&[0, 0, 1, 1], &[2, 2]).unwrap();
/// assert_eq!(code.index(), 0b0011);
/// assert!(encode_neighborhood(&[0, 0, 1, 2], &[2, 2]).is_err());
/// # }
/// ```
pub fn encode_neighborhood(
    values: &[u8],
    shape: &[usize],
) -> Result<NeighborhoodCode, SurfelError> {
    check_layout(values.len(), shape)?;

    let mut corners = [false; NUM_CORNERS];

    for (index, (corner, value)) in corners.iter_mut().zip(values.iter()).enumerate() {
        *corner = match *value {
            0 => false,
            1 => true,
            value => return Err(NeighborhoodError::NonBinaryValue { index, value }.into()),
        };
    }

    Ok(NeighborhoodCode::from_corners(&corners))
}

/// Encodes a neighborhood given as a row-major array of booleans.
///
/// `shape` must be exactly [`NEIGHBORHOOD_SHAPE`] and `values` must contain exactly
/// one value per corner.
pub fn encode_bool_neighborhood(
    values: &[bool],
    shape: &[usize],
) -> Result<NeighborhoodCode, SurfelError> {
    check_layout(values.len(), shape)?;

    let mut corners = [false; NUM_CORNERS];
    corners.copy_from_slice(values);
    Ok(NeighborhoodCode::from_corners(&corners))
}

fn check_layout(len: usize, shape: &[usize]) -> Result<(), NeighborhoodError> {
    if shape != &NEIGHBORHOOD_SHAPE[..] {
        return Err(NeighborhoodError::WrongShape {
            expected: NEIGHBORHOOD_SHAPE,
            found: shape.to_vec(),
        });
    }

    if len != NUM_CORNERS {
        return Err(NeighborhoodError::WrongLength {
            expected: NUM_CORNERS,
            found: len,
        });
    }

    Ok(())
}
