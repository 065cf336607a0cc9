use approx::assert_relative_eq;
use surfel3d::error::{SpacingError, SurfelError};
use surfel3d::lookup::{
    generate_surface_area_table, try_generate_surface_area_table, Spacing,
    NEIGHBOR_CODE_TO_NORMALS,
};

fn random_spacing(rng: &mut oorandom::Rand64) -> Spacing {
    let extents = na::Vector3::from_fn(|_, _| 0.05 + rng.rand_float() * 5.0);
    Spacing::new(extents).unwrap()
}

#[test]
fn tables_are_finite_and_non_negative() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..200 {
        let spacing = random_spacing(&mut rng);
        let areas = generate_surface_area_table(&spacing);

        assert_eq!(areas.len(), 256);
        assert!(
            areas.iter().all(|a| a.is_finite() && *a >= 0.0),
            "Invalid area for spacing {spacing:?}"
        );
        assert_eq!(areas[0], 0.0);
        assert_eq!(areas[255], 0.0);
    }
}

#[test]
fn unit_spacing_reproduces_raw_normal_norms() {
    let areas = generate_surface_area_table(&Spacing::unit());

    for (code, normals) in NEIGHBOR_CODE_TO_NORMALS.iter().enumerate() {
        let mut expected = 0.0;
        for n in normals.iter() {
            expected += (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        }

        assert_relative_eq!(areas[code], expected, epsilon = 1.0e-15);
    }

    assert_relative_eq!(areas[3], 0.5f64.sqrt(), epsilon = 1.0e-15);
    assert_relative_eq!(areas[15], 1.0, epsilon = 1.0e-15);
}

#[test]
fn complementary_codes_have_the_same_area() {
    let areas = generate_surface_area_table(&Spacing::unit());
    assert_relative_eq!(areas[1], areas[254]);

    for code in 0..256 {
        assert_relative_eq!(areas[code], areas[255 - code], epsilon = 1.0e-12);
    }

    // Duality also holds for scaled isotropic voxels.
    let areas = generate_surface_area_table(&Spacing::isotropic(0.7).unwrap());
    for code in 0..256 {
        assert_relative_eq!(areas[code], areas[255 - code], epsilon = 1.0e-12);
    }
}

#[test]
fn areas_scale_quadratically_with_spacing() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..50 {
        let spacing = random_spacing(&mut rng);
        let factor = 0.1 + rng.rand_float() * 3.0;
        let areas = generate_surface_area_table(&spacing);
        let scaled_areas = generate_surface_area_table(&spacing.scaled(factor).unwrap());

        for code in 0..256 {
            assert_relative_eq!(
                scaled_areas[code],
                areas[code] * factor * factor,
                max_relative = 1.0e-10
            );
        }
    }
}

#[test]
fn slab_aligned_surfel_measures_the_face_area() {
    // Code 15: the four voxels with first coordinate 1 are inside. The boundary is
    // a plane orthogonal to the first axis, with area `sy * sz`.
    let areas = try_generate_surface_area_table(&[3.0, 2.0, 0.5]).unwrap();
    assert_relative_eq!(areas[15], 2.0 * 0.5, epsilon = 1.0e-12);
    assert_relative_eq!(areas[240], 2.0 * 0.5, epsilon = 1.0e-12);
}

#[test]
fn reject_invalid_spacings() {
    assert_eq!(
        try_generate_surface_area_table(&[1.0, 0.0, 1.0]),
        Err(SurfelError::InvalidSpacing(SpacingError::NonPositive {
            axis: 1,
            value: 0.0
        }))
    );
    assert!(matches!(
        try_generate_surface_area_table(&[-1.0, 1.0, 1.0]),
        Err(SurfelError::InvalidSpacing(SpacingError::NonPositive { axis: 0, .. }))
    ));
    assert!(matches!(
        try_generate_surface_area_table(&[1.0, 1.0, f64::NAN]),
        Err(SurfelError::InvalidSpacing(SpacingError::NonFinite { axis: 2, .. }))
    ));
    assert!(matches!(
        try_generate_surface_area_table(&[1.0, 1.0]),
        Err(SurfelError::InvalidSpacing(SpacingError::WrongArity {
            expected: 3,
            found: 2
        }))
    ));
}

#[test]
fn every_accepted_spacing_yields_a_finite_table() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..200 {
        // Extents spread over the whole exponent range of `f64`.
        let extents = na::Vector3::from_fn(|_, _| 10.0f64.powf(rng.rand_float() * 600.0 - 300.0));

        match Spacing::new(extents) {
            Ok(spacing) => {
                let areas = generate_surface_area_table(&spacing);
                assert!(areas.iter().all(|a| a.is_finite() && *a >= 0.0), "{extents:?}");
            }
            Err(err) => assert!(matches!(err, SpacingError::Overflow { .. }), "{err:?}"),
        }
    }

    assert_eq!(
        Spacing::isotropic(1.0e160),
        Err(SpacingError::Overflow {
            extents: [1.0e160; 3]
        })
    );
}
