extern crate nalgebra as na;

use na::Vector2;
use surfel2d::lookup::{generate_contour_length_table, Spacing};
use surfel2d::mask::{total_contour_length, BinaryMask};

fn main() {
    let spacing = Spacing::new(Vector2::new(1.0, 0.5)).unwrap();

    /*
     * Print the lookup table.
     */
    for (code, length) in generate_contour_length_table(&spacing).iter().enumerate() {
        println!("{code:04b}: {length:.4}");
    }

    /*
     * Measure the contour of a rasterized disk.
     */
    let radius = 10.0;
    let shape = Vector2::new(32, 64);
    let center = shape.map(|e| e as f64).component_mul(spacing.extents()) / 2.0;
    let disk = BinaryMask::from_fn(shape, |p| {
        let pos = (p.coords.map(|e| e as f64) + Vector2::repeat(0.5))
            .component_mul(spacing.extents());
        (pos - center).norm() <= radius
    });

    let length = total_contour_length(&disk, &spacing);
    let exact = 2.0 * core::f64::consts::PI * radius;
    println!("Marching-squares perimeter: {length:.3} mm (exact circle: {exact:.3} mm)");
}
