use core::f32::consts::{FRAC_PI_4, SQRT_2};
use na::{Point3, UnitQuaternion, Vector3};
use obbsat3d::query::{self, sat::BoxAxisFeature};
use obbsat3d::shape::RigidBox;

fn crossing_boxes() -> (RigidBox, RigidBox) {
    let box1 = RigidBox::new(
        Point3::origin(),
        Vector3::repeat(1.0),
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4),
    );
    let box2 = RigidBox::new(
        Point3::new(2.0 * SQRT_2 - 0.1, 0.0, 0.0),
        Vector3::repeat(1.0),
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_4),
    );
    (box1, box2)
}

#[test]
fn crossing_edges_contact() {
    let (box1, box2) = crossing_boxes();

    let res = query::test_intersection(&box1, &box2);
    assert!(res.intersects);
    assert!(!res.is_face_contact);
    assert_eq!(res.feature, BoxAxisFeature::Edge { axis1: 2, axis2: 1 });
    assert_relative_eq!(res.normal.into_inner(), Vector3::x(), epsilon = 1.0e-6);
    assert_relative_eq!(res.depth, 0.1, epsilon = 1.0e-5);

    // The normal is orthogonal to both edges.
    assert_relative_eq!(res.normal.dot(&res.edge_dir1), 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(res.normal.dot(&res.edge_dir2), 0.0, epsilon = 1.0e-6);

    assert_relative_eq!(
        res.world_point1(&box1),
        Point3::new(SQRT_2, 0.0, 0.0),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        res.world_point2(&box2),
        Point3::new(SQRT_2 - 0.1, 0.0, 0.0),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(res.local_point1, Point3::new(1.0, -1.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(res.local_point2, Point3::new(-1.0, 0.0, -1.0), epsilon = 1.0e-5);

    // Exactly zero dot products select the positive side.
    assert_eq!(res.local_support1, Vector3::new(1.0, -1.0, 1.0));
    assert_eq!(res.local_support2, Vector3::new(-1.0, -1.0, -1.0));
}

#[test]
fn swapped_crossing_edges_contact() {
    let (box1, box2) = crossing_boxes();
    let res = query::test_intersection(&box1, &box2);
    let swapped = query::test_intersection(&box2, &box1);

    assert!(swapped.intersects);
    assert_eq!(swapped.feature, BoxAxisFeature::Edge { axis1: 1, axis2: 2 });
    assert_relative_eq!(swapped.normal.into_inner(), -Vector3::x(), epsilon = 1.0e-6);
    assert_relative_eq!(swapped.depth, res.depth, epsilon = 1.0e-6);
    assert_relative_eq!(swapped.local_point1, res.local_point2, epsilon = 1.0e-5);
    assert_relative_eq!(swapped.local_point2, res.local_point1, epsilon = 1.0e-5);
}
