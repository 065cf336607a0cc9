extern crate nalgebra as na;

use na::Vector3;
use surfel3d::lookup::{BoundaryMeasureTable, Spacing};
use surfel3d::mask::BinaryMask;

fn main() {
    /*
     * Voxelize a ball on an anisotropic grid, as in a CT scan with thick slices.
     */
    let spacing = Spacing::new(Vector3::new(0.7, 0.7, 2.5)).unwrap();
    let radius = 20.0;
    let shape = Vector3::new(64, 64, 20);
    let center = shape.map(|e| e as f64).component_mul(spacing.extents()) / 2.0;

    let ball = BinaryMask::from_fn(shape, |p| {
        let pos = (p.coords.map(|e| e as f64) + Vector3::repeat(0.5))
            .component_mul(spacing.extents());
        (pos - center).norm() <= radius
    });

    /*
     * Measure its surface.
     */
    let table = BoundaryMeasureTable::new(spacing);
    let area = table.total_measure(&ball.code_histogram());
    let exact = 4.0 * core::f64::consts::PI * radius * radius;

    println!("Voxels inside: {}", ball.num_inside());
    println!("Marching-cubes area: {area:.2} mm² (exact sphere: {exact:.2} mm²)");
}
