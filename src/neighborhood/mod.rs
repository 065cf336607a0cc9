//! Binary neighborhoods and their integer codes.

pub use self::encoder::{
    corner_offset, encode_bool_neighborhood, encode_neighborhood, ENCODE_NEIGHBORHOOD_KERNEL,
    NEIGHBORHOOD_SHAPE,
};
pub use self::neighborhood_code::NeighborhoodCode;

mod encoder;
mod neighborhood_code;
