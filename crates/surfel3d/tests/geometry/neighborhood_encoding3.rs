use surfel3d::error::{NeighborhoodError, SurfelError};
use surfel3d::lookup::{generate_surface_area_table, Spacing};
use surfel3d::neighborhood::{encode_neighborhood, NeighborhoodCode};

const SHAPE: [usize; 3] = [2, 2, 2];

#[test]
fn every_neighborhood_encodes_deterministically() {
    let spacing = Spacing::from_slice(&[0.8, 0.8, 2.5]).unwrap();
    let areas = generate_surface_area_table(&spacing);
    let areas_again = generate_surface_area_table(&spacing);

    for bits in 0u32..256 {
        // Row-major 2×2×2 array: the first value is the voxel (0, 0, 0).
        let values: Vec<u8> = (0..8).map(|i| ((bits >> (7 - i)) & 1) as u8).collect();

        let code = encode_neighborhood(&values, &SHAPE).unwrap();
        assert_eq!(code.index(), bits as usize);
        assert_eq!(encode_neighborhood(&values, &SHAPE).unwrap(), code);
        assert_eq!(areas[code.index()], areas_again[code.index()]);
    }
}

#[test]
fn kernel_weights_follow_the_axis_order() {
    let mut values = [0u8; 8];
    values[0] = 1;
    assert_eq!(encode_neighborhood(&values, &SHAPE).unwrap().index(), 128);

    // The voxel (0, 0, 1) is the second one in row-major order.
    let mut values = [0u8; 8];
    values[1] = 1;
    assert_eq!(
        encode_neighborhood(&values, &SHAPE).unwrap(),
        NeighborhoodCode::CORNER_001
    );

    // The voxel (1, 0, 0) is the fifth one.
    let mut values = [0u8; 8];
    values[4] = 1;
    assert_eq!(encode_neighborhood(&values, &SHAPE).unwrap().index(), 8);

    assert_eq!(
        encode_neighborhood(&[1; 8], &SHAPE).unwrap(),
        NeighborhoodCode::INSIDE
    );
}

#[test]
fn reject_3x2x2_neighborhoods() {
    let values = [0u8; 12];
    let err = encode_neighborhood(&values, &[3, 2, 2]).unwrap_err();
    assert_eq!(
        err,
        SurfelError::InvalidNeighborhood(NeighborhoodError::WrongShape {
            expected: SHAPE,
            found: vec![3, 2, 2],
        })
    );
}

#[test]
fn reject_2d_neighborhoods() {
    let err = encode_neighborhood(&[0, 1, 0, 1], &[2, 2]).unwrap_err();
    assert!(matches!(err, SurfelError::InvalidNeighborhood(_)));
}

#[test]
fn reject_non_binary_values() {
    let values = [0, 0, 0, 0, 0, 0, 0, 255];
    let err = encode_neighborhood(&values, &SHAPE).unwrap_err();
    assert_eq!(
        err,
        SurfelError::InvalidNeighborhood(NeighborhoodError::NonBinaryValue {
            index: 7,
            value: 255
        })
    );
}
