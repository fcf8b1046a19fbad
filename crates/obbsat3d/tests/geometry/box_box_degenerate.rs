use na::{Point3, UnitQuaternion, Vector3};
use obbsat3d::query::{self, details, sat::BoxAxisFeature};
use obbsat3d::shape::RigidBox;

fn boxes() -> (RigidBox, RigidBox) {
    let box1 = RigidBox::new(
        Point3::origin(),
        Vector3::new(2.0, 1.0, 1.0),
        UnitQuaternion::identity(),
    );
    let box2 = RigidBox::new(
        Point3::new(2.5, 1.8, 0.5),
        Vector3::repeat(1.0),
        UnitQuaternion::identity(),
    );
    (box1, box2)
}

#[test]
fn parallel_edges_witness_lies_on_the_overlap() {
    let (box1, box2) = boxes();

    let res = query::test_intersection(&box1, &box2);
    assert!(res.intersects);
    assert!(res.is_face_contact);
    assert_relative_eq!(res.normal.into_inner(), Vector3::y());
    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-5);

    let witness = res.world_point2(&box2);

    for axis in [Vector3::x(), Vector3::z()] {
        let (bottom1, top1) = box1.project_on_axis(&axis);
        let (bottom2, top2) = box2.project_on_axis(&axis);
        let coord = witness.coords.dot(&axis);
        assert!(coord >= bottom1.max(bottom2) && coord <= top1.min(top2));
    }

    assert_relative_eq!(witness, Point3::new(1.75, 0.8, 0.25), epsilon = 1.0e-5);
    assert_relative_eq!(
        res.world_point1(&box1),
        Point3::new(1.75, 1.0, 0.25),
        epsilon = 1.0e-5
    );
}

#[test]
fn swapped_parallel_edges() {
    let (box1, box2) = boxes();

    let res = query::test_intersection(&box2, &box1);
    assert_eq!(
        res.feature,
        BoxAxisFeature::Face {
            reference_is_first: true,
            axis: 1
        }
    );
    assert_relative_eq!(res.normal.into_inner(), -Vector3::y());
    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-5);
    assert_relative_eq!(res.local_point1, Point3::new(-0.75, -1.0, -0.25), epsilon = 1.0e-5);
    assert_relative_eq!(res.local_point2, Point3::new(1.75, 1.0, 0.25), epsilon = 1.0e-5);
}

#[test]
fn fix_keeps_orthogonal_coordinates() {
    let (box1, box2) = boxes();
    let pt = Point3::new(-7.0, 3.0, 4.0);

    let fixed = details::fix_degenerate_support_point(&pt, &Vector3::new(0.0, 0.0, 2.0), &box1, &box2);
    assert_relative_eq!(fixed, Point3::new(-7.0, 3.0, 0.25));
}

// A quarter turn rarely leaves an exactly zero dot product in floating point, so the
// support point is not recentered. Only the depth and the normal direction are reliable.
#[test]
fn quarter_turn_is_not_recentered() {
    let (box1, _) = boxes();
    let box2 = RigidBox::new(
        Point3::new(2.5, 1.8, 0.5),
        Vector3::repeat(1.0),
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), core::f32::consts::FRAC_PI_2),
    );

    let res = query::test_intersection(&box1, &box2);
    assert!(res.intersects);
    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-4);
    assert_relative_eq!(res.normal.y.abs(), 1.0, epsilon = 1.0e-4);
}
