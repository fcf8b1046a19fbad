extern crate nalgebra as na;

use na::{Point3, UnitQuaternion, Vector3};
use obbsat3d::query;
use obbsat3d::shape::RigidBox;

fn main() {
    let box1 = RigidBox::new(
        Point3::origin(),
        Vector3::new(1.0, 1.0, 1.0),
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), core::f32::consts::FRAC_PI_4),
    );
    let box2 = RigidBox::new(
        Point3::new(2.7, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 1.0),
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), core::f32::consts::FRAC_PI_4),
    );

    let res = query::test_intersection(&box1, &box2);

    // Feed these to any line renderer.
    for line in query::debug_lines(&box1, &box2, &res) {
        println!("{:?} -> {:?}, color: {:?}", line.a, line.b, line.color);
    }
}
