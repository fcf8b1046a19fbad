use crate::query::sat;
use crate::shape::RigidBox;

/// Intersection test between boxes.
///
/// This only runs the separating axis test, without reconstructing any contact. It
/// returns `false` iff. [`test_intersection`](crate::query::test_intersection) would
/// report separated boxes.
#[inline]
pub fn intersection_test_box_box(box1: &RigidBox, box2: &RigidBox) -> bool {
    !sat::box_box_candidate_axes(box1, box2)
        .iter()
        .any(|(axis, _)| sat::box_box_separation_wrt_axis(box1, box2, axis) > 0.0)
}
