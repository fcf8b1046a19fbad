use core::f32::consts::{FRAC_PI_4, SQRT_2};
use na::{Point3, UnitQuaternion, Vector3};
use obbsat3d::query::{self, DebugLine};
use obbsat3d::shape::RigidBox;

#[test]
fn edge_contact_lines() {
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

    let res = query::test_intersection(&box1, &box2);
    let lines = query::debug_lines(&box1, &box2, &res);
    let colors: Vec<_> = lines.iter().map(|l| l.color).collect();

    assert_eq!(
        colors,
        [
            DebugLine::RED,
            DebugLine::GREEN,
            DebugLine::BLUE,
            DebugLine::YELLOW,
            DebugLine::DARK_GREEN,
            DebugLine::DARK_GREEN,
            DebugLine::BLACK,
            DebugLine::BLACK,
            DebugLine::DARK_BLUE,
            DebugLine::DARK_BLUE,
        ]
    );

    // The witness points are joined by a segment of length `depth`.
    assert_relative_eq!((lines[3].b - lines[3].a).norm(), res.depth, epsilon = 1.0e-5);
    // The support vertex of the first box is its corner at `(1, -1, 1)`.
    assert_relative_eq!(lines[8].b, Point3::new(SQRT_2, 0.0, 1.0), epsilon = 1.0e-5);
}

#[test]
fn line_count_per_contact_kind() {
    let box1 = RigidBox::new(Point3::origin(), Vector3::repeat(1.0), UnitQuaternion::identity());
    let far = RigidBox::new(
        Point3::new(0.0, 0.0, 4.0),
        Vector3::repeat(1.0),
        UnitQuaternion::identity(),
    );
    let near = RigidBox::new(
        Point3::new(0.0, 0.0, 1.0),
        Vector3::repeat(1.0),
        UnitQuaternion::identity(),
    );

    let separated = query::test_intersection(&box1, &far);
    assert_eq!(query::debug_lines(&box1, &far, &separated).len(), 1);

    let face = query::test_intersection(&box1, &near);
    assert!(face.is_face_contact);
    assert_eq!(query::debug_lines(&box1, &near, &face).len(), 5);
}
