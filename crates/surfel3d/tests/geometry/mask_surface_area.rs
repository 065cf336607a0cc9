use approx::assert_relative_eq;
use na::{Point3, Vector3};
use surfel3d::lookup::{BoundaryMeasureTable, Spacing};
use surfel3d::mask::{total_surface_area, BinaryMask};

fn full_cube(n: usize) -> BinaryMask {
    BinaryMask::from_fn(Vector3::repeat(n), |_| true)
}

#[test]
fn single_voxel_is_an_octahedron() {
    let area = total_surface_area(&full_cube(1), &Spacing::unit());
    assert_relative_eq!(area, 3.0f64.sqrt(), epsilon = 1.0e-12);
}

#[test]
fn single_anisotropic_voxel() {
    let spacing = Spacing::from_slice(&[2.0, 1.0, 0.5]).unwrap();
    let area = total_surface_area(&full_cube(1), &spacing);
    assert_relative_eq!(area, 2.29128784747792, epsilon = 1.0e-12);
}

#[test]
fn full_cubes() {
    assert_relative_eq!(
        total_surface_area(&full_cube(2), &Spacing::unit()),
        16.21733218180745,
        epsilon = 1.0e-10
    );
    assert_relative_eq!(
        total_surface_area(&full_cube(3), &Spacing::unit()),
        42.70261355604601,
        epsilon = 1.0e-10
    );

    let spacing = Spacing::from_slice(&[2.0, 1.0, 0.5]).unwrap();
    assert_relative_eq!(
        total_surface_area(&full_cube(3), &spacing),
        51.95390696371197,
        epsilon = 1.0e-10
    );
}

#[test]
fn area_is_translation_invariant() {
    let spacing = Spacing::from_slice(&[1.5, 0.7, 0.7]).unwrap();
    let reference = total_surface_area(&full_cube(2), &spacing);

    let shape = Vector3::new(6, 5, 7);
    let offset = Vector3::new(3, 1, 2);
    let mask = BinaryMask::from_fn(shape, |p| {
        (0..3).all(|k| p[k] >= offset[k] && p[k] < offset[k] + 2)
    });

    assert_eq!(mask.num_inside(), 8);
    assert_relative_eq!(
        total_surface_area(&mask, &spacing),
        reference,
        epsilon = 1.0e-10
    );
}

#[test]
fn histogram_and_table_agree_with_direct_summation() {
    let mut rng = oorandom::Rand64::new(1234);
    let shape = Vector3::new(5, 4, 6);
    let mask = BinaryMask::from_fn(shape, |_| rng.rand_float() < 0.4);
    let table = BoundaryMeasureTable::try_new(&[0.9, 1.1, 2.0]).unwrap();

    let mut expected = 0.0;
    for i in -1..shape.x as isize {
        for j in -1..shape.y as isize {
            for k in -1..shape.z as isize {
                expected += table[mask.neighborhood_code_at(Point3::new(i, j, k))];
            }
        }
    }

    assert_relative_eq!(
        table.total_measure(&mask.code_histogram()),
        expected,
        epsilon = 1.0e-9
    );
    assert_relative_eq!(
        total_surface_area(&mask, table.spacing()),
        expected,
        epsilon = 1.0e-9
    );
}

#[test]
fn empty_mask_has_no_surface() {
    let mask = BinaryMask::outside(Vector3::new(3, 4, 5));
    assert_eq!(total_surface_area(&mask, &Spacing::unit()), 0.0);
}
