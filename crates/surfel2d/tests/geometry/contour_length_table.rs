use approx::assert_relative_eq;
use surfel2d::error::{SpacingError, SurfelError};
use surfel2d::lookup::{
    contour_segment, generate_contour_length_table, try_generate_contour_length_table,
    ContourSegment, Spacing,
};
use surfel2d::neighborhood::NeighborhoodCode;

#[test]
fn unit_spacing() {
    let lengths = generate_contour_length_table(&Spacing::unit());
    let diag = 0.70710678;

    assert_eq!(lengths.len(), 16);
    assert_relative_eq!(lengths[0b0001], diag, epsilon = 1.0e-8);
    assert_eq!(lengths[0b0011], 1.0);
    assert_eq!(lengths[0b0101], 1.0);
    assert_relative_eq!(lengths[0b0110], 1.41421356, epsilon = 1.0e-8);
    assert_eq!(lengths[0b0000], 0.0);
    assert_eq!(lengths[0b1111], 0.0);
}

#[test]
fn anisotropic_spacing() {
    // Vertical spacing 2, horizontal spacing 1.
    let lengths = try_generate_contour_length_table(&[2.0, 1.0]).unwrap();
    let diag = 0.5 * 5.0f64.sqrt();

    assert_relative_eq!(lengths[0b0001], diag, epsilon = 1.0e-12);
    assert_relative_eq!(lengths[0b1001], 2.0 * diag, epsilon = 1.0e-12);
    assert_eq!(lengths[0b0011], 1.0);
    assert_eq!(lengths[0b0101], 2.0);
}

#[test]
fn fourteen_non_zero_assignments() {
    let lengths = try_generate_contour_length_table(&[0.3, 0.9]).unwrap();
    let non_zero = lengths.iter().filter(|l| **l != 0.0).count();
    assert_eq!(non_zero, 14);

    for code in NeighborhoodCode::iter_all() {
        let expected = match code.num_inside() {
            0 | 4 => ContourSegment::None,
            1 | 3 => ContourSegment::Diagonal,
            _ if code == NeighborhoodCode::BOTTOM_LEFT | NeighborhoodCode::BOTTOM_RIGHT
                || code == NeighborhoodCode::TOP_LEFT | NeighborhoodCode::TOP_RIGHT =>
            {
                ContourSegment::Horizontal
            }
            _ if code == NeighborhoodCode::TOP_RIGHT | NeighborhoodCode::BOTTOM_RIGHT
                || code == NeighborhoodCode::TOP_LEFT | NeighborhoodCode::BOTTOM_LEFT =>
            {
                ContourSegment::Vertical
            }
            _ => ContourSegment::DoubleDiagonal,
        };

        assert_eq!(contour_segment(code), expected, "{code:?}");
    }
}

#[test]
fn complementary_codes_have_the_same_length() {
    let mut rng = oorandom::Rand64::new(3);

    for _ in 0..50 {
        let spacing = Spacing::new(na::Vector2::new(
            0.1 + rng.rand_float() * 4.0,
            0.1 + rng.rand_float() * 4.0,
        ))
        .unwrap();
        let lengths = generate_contour_length_table(&spacing);

        for code in 0..16 {
            assert_eq!(lengths[code], lengths[15 - code]);
        }
    }
}

#[test]
fn lengths_scale_linearly_with_spacing() {
    let mut rng = oorandom::Rand64::new(11);

    for _ in 0..50 {
        let spacing = Spacing::new(na::Vector2::new(
            0.1 + rng.rand_float() * 4.0,
            0.1 + rng.rand_float() * 4.0,
        ))
        .unwrap();
        let factor = 0.1 + rng.rand_float() * 3.0;
        let lengths = generate_contour_length_table(&spacing);
        let scaled = generate_contour_length_table(&spacing.scaled(factor).unwrap());

        for code in 0..16 {
            assert_relative_eq!(scaled[code], lengths[code] * factor, max_relative = 1.0e-12);
        }
    }
}

#[test]
fn reject_invalid_spacings() {
    assert!(matches!(
        try_generate_contour_length_table(&[0.0, 1.0]),
        Err(SurfelError::InvalidSpacing(SpacingError::NonPositive { axis: 0, .. }))
    ));
    assert!(matches!(
        try_generate_contour_length_table(&[1.0, -3.0]),
        Err(SurfelError::InvalidSpacing(SpacingError::NonPositive { axis: 1, .. }))
    ));
    assert!(matches!(
        try_generate_contour_length_table(&[f64::INFINITY, 1.0]),
        Err(SurfelError::InvalidSpacing(SpacingError::NonFinite { axis: 0, .. }))
    ));
    assert!(matches!(
        try_generate_contour_length_table(&[1.0]),
        Err(SurfelError::InvalidSpacing(SpacingError::WrongArity {
            expected: 2,
            found: 1
        }))
    ));
}
