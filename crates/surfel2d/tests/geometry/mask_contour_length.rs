use approx::assert_relative_eq;
use na::Vector2;
use surfel2d::lookup::Spacing;
use surfel2d::mask::{boundary_measure, total_contour_length, BinaryMask};

fn full_rect(rows: usize, cols: usize) -> BinaryMask {
    BinaryMask::from_fn(Vector2::new(rows, cols), |_| true)
}

#[test]
fn single_pixel_is_a_diamond() {
    let length = total_contour_length(&full_rect(1, 1), &Spacing::unit());
    assert_relative_eq!(length, 2.0 * 2.0f64.sqrt(), epsilon = 1.0e-12);

    let spacing = Spacing::from_slice(&[2.0, 1.0]).unwrap();
    let length = total_contour_length(&full_rect(1, 1), &spacing);
    assert_relative_eq!(length, 2.0 * 5.0f64.sqrt(), epsilon = 1.0e-12);
}

#[test]
fn full_rectangles() {
    assert_relative_eq!(
        total_contour_length(&full_rect(2, 2), &Spacing::unit()),
        6.828427124746191,
        epsilon = 1.0e-12
    );

    // Four cut corners, 2 × 2 vertical edges of length 2, 2 × 3 horizontal edges of length 1.
    let spacing = Spacing::from_slice(&[2.0, 1.0]).unwrap();
    assert_relative_eq!(
        total_contour_length(&full_rect(3, 4), &spacing),
        18.47213595499958,
        epsilon = 1.0e-12
    );
}

#[test]
fn contour_of_a_hole_is_measured() {
    // A 3×3 square with its center removed has an outer and an inner contour.
    let ring = BinaryMask::from_fn(Vector2::new(3, 3), |p| !(p.x == 1 && p.y == 1));
    let outer = total_contour_length(&full_rect(3, 3), &Spacing::unit());
    let inner = total_contour_length(&full_rect(1, 1), &Spacing::unit());

    assert_relative_eq!(
        boundary_measure(&ring, &Spacing::unit()),
        outer + inner,
        epsilon = 1.0e-12
    );
}

#[test]
fn mask_data_must_match_its_shape() {
    assert!(BinaryMask::new(Vector2::new(2, 3), vec![true; 5]).is_err());
    let mask = BinaryMask::new(Vector2::new(2, 3), vec![true; 6]).unwrap();
    assert_eq!(mask.len(), 6);
    assert_eq!(mask, full_rect(2, 3));
}
