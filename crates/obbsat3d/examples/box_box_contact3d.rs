extern crate nalgebra as na;

use na::{Point3, UnitQuaternion, Vector3};
use obbsat3d::query;
use obbsat3d::shape::RigidBox;

fn main() {
    let half_extents = Vector3::new(1.0, 1.0, 1.0);
    let box1 = RigidBox::new(Point3::origin(), half_extents, UnitQuaternion::identity());

    let box_penetrating = RigidBox::new(
        Point3::new(1.5, 0.0, 0.0),
        half_extents,
        UnitQuaternion::identity(),
    );
    let box_crossing = RigidBox::new(
        Point3::new(2.7, 0.0, 0.0),
        half_extents,
        UnitQuaternion::from_euler_angles(0.0, 0.785, 0.785),
    );
    let box_too_far = RigidBox::new(
        Point3::new(3.0, 3.0, 3.0),
        half_extents,
        UnitQuaternion::identity(),
    );

    let res_penetrating = query::test_intersection(&box1, &box_penetrating);
    let res_crossing = query::test_intersection(&box1, &box_crossing);
    let res_too_far = query::test_intersection(&box1, &box_too_far);

    assert!(res_penetrating.intersects);
    assert!(res_penetrating.is_face_contact);
    assert!(res_penetrating.depth >= 0.0);
    assert_eq!(
        res_crossing.intersects,
        query::intersection_test_box_box(&box1, &box_crossing)
    );
    assert!(!res_too_far.intersects);
    assert!(res_too_far.depth < 0.0);

    for res in [res_penetrating, res_crossing, res_too_far] {
        println!(
            "intersects: {}, face contact: {}, normal: {:?}, depth: {}",
            res.intersects, res.is_face_contact, res.normal, res.depth
        );
    }
}
