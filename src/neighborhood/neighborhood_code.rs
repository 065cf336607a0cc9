use super::ENCODE_NEIGHBORHOOD_KERNEL;
use crate::math::{NUM_CODES, NUM_CORNERS};

#[cfg(feature = "dim2")]
bitflags::bitflags! {
    /// The binary code of a 2×2 pixel neighborhood.
    ///
    /// Each flag is set if the corresponding pixel is inside the segmented object.
    /// The axis `0` points downward and the axis `1` points to the right:
    ///
    /// ```text
    /// (0, 0) --> (0, 1)
    ///   |
    /// (1, 0)
    /// ```
    ///
    /// The integer value of the code (see [`NeighborhoodCode::index`]) is the index
    /// of the neighborhood in the contour-length table.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    pub struct NeighborhoodCode: u8 {
        /// The pixel at `(0, 0)`.
        const TOP_LEFT = 0b1000;
        /// The pixel at `(0, 1)`.
        const TOP_RIGHT = 0b0100;
        /// The pixel at `(1, 0)`.
        const BOTTOM_LEFT = 0b0010;
        /// The pixel at `(1, 1)`.
        const BOTTOM_RIGHT = 0b0001;
    }
}

#[cfg(feature = "dim3")]
bitflags::bitflags! {
    /// The binary code of a 2×2×2 voxel neighborhood.
    ///
    /// Each flag is set if the corresponding voxel is inside the segmented object.
    /// The flag `CORNER_ijk` identifies the voxel at offset `(i, j, k)` from the
    /// neighborhood origin. Its weight is `1 << (7 - (4i + 2j + k))`: the first
    /// axis varies slowest.
    ///
    /// The integer value of the code (see [`NeighborhoodCode::index`]) is the index
    /// of the neighborhood in the surface-area table.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    pub struct NeighborhoodCode: u8 {
        /// The voxel at `(0, 0, 0)`.
        const CORNER_000 = 1 << 7;
        /// The voxel at `(0, 0, 1)`.
        const CORNER_001 = 1 << 6;
        /// The voxel at `(0, 1, 0)`.
        const CORNER_010 = 1 << 5;
        /// The voxel at `(0, 1, 1)`.
        const CORNER_011 = 1 << 4;
        /// The voxel at `(1, 0, 0)`.
        const CORNER_100 = 1 << 3;
        /// The voxel at `(1, 0, 1)`.
        const CORNER_101 = 1 << 2;
        /// The voxel at `(1, 1, 0)`.
        const CORNER_110 = 1 << 1;
        /// The voxel at `(1, 1, 1)`.
        const CORNER_111 = 1 << 0;
    }
}

impl NeighborhoodCode {
    /// The code of a neighborhood lying entirely outside of the object.
    pub const OUTSIDE: Self = Self::empty();
    /// The code of a neighborhood lying entirely inside of the object.
    pub const INSIDE: Self = Self::all();

    /// Encodes a neighborhood given the inside/outside state of each of its corners.
    ///
    /// The corners are given in row-major order (first axis slowest), i.e., `inside[i]`
    /// is the corner at [`corner_offset(i)`](super::corner_offset).
    pub fn from_corners(inside: &[bool; NUM_CORNERS]) -> Self {
        let mut code = 0;

        for (weight, is_inside) in ENCODE_NEIGHBORHOOD_KERNEL.iter().zip(inside.iter()) {
            if *is_inside {
                code |= *weight;
            }
        }

        Self::from_bits_retain(code)
    }

    /// The code with the given integer value, if it is smaller than [`NUM_CODES`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_CODES {
            Some(Self::from_bits_retain(index as u8))
        } else {
            None
        }
    }

    /// The integer value of this code, usable as an index into a lookup table.
    #[inline]
    pub const fn index(self) -> usize {
        self.bits() as usize
    }

    /// Decodes this code into the inside/outside state of each corner, in row-major order.
    pub fn corners(self) -> [bool; NUM_CORNERS] {
        let mut result = [false; NUM_CORNERS];

        for (is_inside, weight) in result.iter_mut().zip(ENCODE_NEIGHBORHOOD_KERNEL.iter()) {
            *is_inside = self.bits() & *weight != 0;
        }

        result
    }

    /// Is this neighborhood entirely inside or entirely outside of the object?
    ///
    /// Uniform neighborhoods aren't crossed by the object boundary.
    pub fn is_uniform(self) -> bool {
        self.is_empty() || self.is_all()
    }

    /// The number of corners inside of the object.
    pub fn num_inside(self) -> u32 {
        self.bits().count_ones()
    }

    /// Iterates through all the [`NUM_CODES`] neighborhood codes, in increasing order.
    pub fn iter_all() -> impl ExactSizeIterator<Item = Self> {
        (0..NUM_CODES).map(|i| Self::from_bits_retain(i as u8))
    }
}
