use super::Spacing;
use crate::error::SurfelError;
use crate::math::{Real, NUM_CODES};
use crate::neighborhood::NeighborhoodCode;

/// The kind of contour segment crossing a 2×2 pixel neighborhood.
///
/// See page 38 of <https://nccastaff.bournemouth.ac.uk/jmacey/MastersProjects/MSc14/06/thesis.pdf>
/// for a picture of each marching-squares case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ContourSegment {
    /// The neighborhood is uniform: no contour crosses it.
    None,
    /// A single segment cutting one corner, joining the midpoints of two adjacent edges.
    Diagonal,
    /// Two segments cutting two opposite corners.
    DoubleDiagonal,
    /// A vertical segment separating the left and right columns.
    Vertical,
    /// A horizontal segment separating the top and bottom rows.
    Horizontal,
}

impl ContourSegment {
    /// The physical length of this contour segment for pixels of size `spacing`.
    pub fn length(self, spacing: &Spacing) -> Real {
        match self {
            ContourSegment::None => 0.0,
            ContourSegment::Diagonal => half_diagonal(spacing),
            ContourSegment::DoubleDiagonal => 2.0 * half_diagonal(spacing),
            ContourSegment::Vertical => spacing.vertical(),
            ContourSegment::Horizontal => spacing.horizontal(),
        }
    }
}

fn half_diagonal(spacing: &Spacing) -> Real {
    0.5 * spacing.extents().norm()
}

/// The contour segment crossing each 2×2 neighborhood, indexed by neighborhood code.
///
/// The axis `0` points downward and the axis `1` points to the right. Codes are written
/// as `TL TR BL BR` (top-left, top-right, bottom-left, bottom-right).
#[rustfmt::skip]
pub const NEIGHBOR_CODE_TO_CONTOUR_SEGMENT: [ContourSegment; NUM_CODES] = [
    ContourSegment::None,           // 00 00
    ContourSegment::Diagonal,       // 00 01
    ContourSegment::Diagonal,       // 00 10
    ContourSegment::Horizontal,     // 00 11
    ContourSegment::Diagonal,       // 01 00
    ContourSegment::Vertical,       // 01 01
    ContourSegment::DoubleDiagonal, // 01 10
    ContourSegment::Diagonal,       // 01 11
    ContourSegment::Diagonal,       // 10 00
    ContourSegment::DoubleDiagonal, // 10 01
    ContourSegment::Vertical,       // 10 10
    ContourSegment::Diagonal,       // 10 11
    ContourSegment::Horizontal,     // 11 00
    ContourSegment::Diagonal,       // 11 01
    ContourSegment::Diagonal,       // 11 10
    ContourSegment::None,           // 11 11
];

/// The contour segment crossing the neighborhood with the given code.
#[inline]
pub fn contour_segment(code: NeighborhoodCode) -> ContourSegment {
    NEIGHBOR_CODE_TO_CONTOUR_SEGMENT[code.index()]
}

/// Computes the length of the contour crossing each 2×2 neighborhood.
///
/// With `sv = spacing.vertical()` and `sh = spacing.horizontal()`, a diagonal segment has
/// the length `0.5 * sqrt(sv² + sh²)`, a vertical segment has the length `sv`, and a
/// horizontal segment has the length `sh`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim2")] {
/// use surfel2d::lookup::{generate_contour_length_table, Spacing};
///
/// let spacing = Spacing::from_slice(&[2.0, 1.0]).unwrap();
/// let lengths = generate_contour_length_table(&spacing);
/// assert_eq!(lengths[0b0011], 1.0);
/// assert_eq!(lengths[0b0101], 2.0);
/// # }
/// ```
pub fn generate_contour_length_table(spacing: &Spacing) -> [Real; NUM_CODES] {
    let mut table = [0.0; NUM_CODES];

    for (length, segment) in table
        .iter_mut()
        .zip(NEIGHBOR_CODE_TO_CONTOUR_SEGMENT.iter())
    {
        *length = segment.length(spacing);
    }

    log::debug!(
        "Generated the contour-length table for the pixel spacing {:?}.",
        spacing.extents()
    );
    table
}

/// Computes the contour-length table from raw spacing components.
///
/// Fails with [`SurfelError::InvalidSpacing`] if `spacing` isn't a valid [`Spacing`]: two
/// finite strictly positive components whose diagonal doesn't overflow. See
/// [`generate_contour_length_table`].
pub fn try_generate_contour_length_table(
    spacing: &[Real],
) -> Result<[Real; NUM_CODES], SurfelError> {
    let spacing = Spacing::from_slice(spacing)?;
    Ok(generate_contour_length_table(&spacing))
}

#[cfg(test)]
fn gen_const_table() -> [ContourSegment; NUM_CODES] {
    use crate::neighborhood::corner_offset;

    let mut result = [ContourSegment::None; NUM_CODES];

    for code in NeighborhoodCode::iter_all() {
        let corners = code.corners();
        let inside: alloc::vec::Vec<_> = (0..corners.len())
            .filter(|i| corners[*i])
            .map(corner_offset)
            .collect();

        result[code.index()] = match inside.len() {
            1 | 3 => ContourSegment::Diagonal,
            // Both inside pixels on the same row: the contour runs horizontally.
            2 if inside[0].x == inside[1].x => ContourSegment::Horizontal,
            2 if inside[0].y == inside[1].y => ContourSegment::Vertical,
            2 => ContourSegment::DoubleDiagonal,
            _ => ContourSegment::None,
        };
    }

    result
}
