use crate::query::details::contact_box_box;
use crate::query::IntersectionResult;
use crate::shape::RigidBox;

/// Tests if two boxes intersect and, if they do, computes one contact between them.
///
/// The returned [`IntersectionResult`] always carries a normal and a depth: when the
/// boxes are disjoint these describe the separating axis found, with a negative depth.
/// Witness points are only computed for intersecting boxes.
///
/// Swapping the boxes yields the same contact up to the orientation of the normal and
/// the order of the witness points.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use nalgebra::{Point3, UnitQuaternion, Vector3};
/// use obbsat3d::query;
/// use obbsat3d::shape::RigidBox;
///
/// let box1 = RigidBox::new(Point3::origin(), Vector3::repeat(1.0), UnitQuaternion::identity());
/// let box2 = RigidBox::new(Point3::new(3.0, 0.0, 0.0), Vector3::repeat(1.0), UnitQuaternion::identity());
///
/// let res = query::test_intersection(&box1, &box2);
/// assert!(!res.intersects);
/// assert_eq!(res.normal.into_inner(), Vector3::x());
/// assert_eq!(res.depth, -1.0);
/// # }
/// ```
pub fn test_intersection(box1: &RigidBox, box2: &RigidBox) -> IntersectionResult {
    contact_box_box(box1, box2)
}
