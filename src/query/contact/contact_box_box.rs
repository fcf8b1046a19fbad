use crate::math::{Point, Real, Vector, DIM};
use crate::query::sat::{self, BoxAxisFeature, BoxBoxAxis, BoxBoxSat};
use crate::query::IntersectionResult;
use crate::shape::RigidBox;
use crate::utils::{self, WSign};
use na::Unit;

/// Intersection test and contact reconstruction between two boxes.
///
/// If the boxes are disjoint, the first separating axis found is reported with a
/// negative depth. Otherwise, the axis of least penetration selects between a face
/// contact (see [`contact_box_box_face`]) and an edge contact (see
/// [`contact_box_box_edge`]).
pub fn contact_box_box(box1: &RigidBox, box2: &RigidBox) -> IntersectionResult {
    match sat::box_box_find_best_axis(box1, box2) {
        BoxBoxSat::Separated(sep) => {
            log::trace!(
                "Boxes separated along {:?} ({:?}), separation: {}",
                sep.axis,
                sep.feature,
                sep.separation
            );
            IntersectionResult::separated(box1, box2, &sep)
        }
        BoxBoxSat::Penetrating(best) => {
            log::trace!(
                "Boxes penetrating, least penetration along {:?} ({:?}), depth: {}",
                best.axis,
                best.feature,
                -best.separation
            );

            match best.feature {
                BoxAxisFeature::Face {
                    reference_is_first, ..
                } => contact_box_box_face(box1, box2, &best, reference_is_first),
                BoxAxisFeature::Edge { axis1, axis2 } => {
                    contact_box_box_edge(box1, box2, &best, axis1, axis2)
                }
            }
        }
    }
}

/// Contact between two boxes penetrating along the face normal `best`.
///
/// The reference box owns the face, and the incident box contributes the vertex
/// deepest along the contact normal. When that vertex is ambiguous because some edge
/// or face of the incident box is orthogonal to the normal, it is moved to the middle
/// of the overlap of both boxes along those directions
/// (see [`fix_degenerate_support_point`]).
pub fn contact_box_box_face(
    box1: &RigidBox,
    box2: &RigidBox,
    best: &BoxBoxAxis,
    reference_is_first: bool,
) -> IntersectionResult {
    let (reference, incident) = if reference_is_first {
        (box1, box2)
    } else {
        (box2, box1)
    };

    let depth = -best.separation;
    let axis = best.axis.into_inner();
    let normal = axis * (incident.center() - reference.center()).dot(&axis).sign();

    // Zero where the incident box has an edge orthogonal to the normal.
    let dirs = Vector::from_fn(|k, _| {
        -normal
            .dot(&incident.local_axis(k).into_inner())
            .sign_or_zero()
    });
    let mut incident_pt =
        incident.local_to_world_point(&utils::scale(&dirs, incident.half_extents()).into());

    for k in 0..DIM {
        if dirs[k] == 0.0 {
            incident_pt =
                fix_degenerate_support_point(&incident_pt, incident.semi_axis(k), box1, box2);
        }
    }

    let reference_pt = incident_pt + normal * depth;
    let local_reference = reference.world_to_local_point(&reference_pt);
    let local_incident = incident.world_to_local_point(&incident_pt);

    let (local_point1, local_point2) = if reference_is_first {
        (local_reference, local_incident)
    } else {
        (local_incident, local_reference)
    };

    IntersectionResult {
        intersects: true,
        is_face_contact: true,
        feature: best.feature,
        normal: Unit::new_unchecked(normal),
        depth,
        local_point1,
        local_point2,
        edge_dir1: reference.center().coords,
        edge_dir2: Vector::zeros(),
        local_support1: Vector::zeros(),
        local_support2: Vector::zeros(),
    }
}

/// Contact between two boxes penetrating along the cross product of the `axis1`-th
/// semi-axis of `box1` and the `axis2`-th semi-axis of `box2`.
///
/// Each box contributes the edge parallel to its semi-axis that passes through its
/// vertex deepest toward the other box. The contact point on `box2` is where its edge
/// crosses the plane containing the edge of `box1` and the normal.
pub fn contact_box_box_edge(
    box1: &RigidBox,
    box2: &RigidBox,
    best: &BoxBoxAxis,
    axis1: usize,
    axis2: usize,
) -> IntersectionResult {
    let depth = -best.separation;
    let axis = best.axis.into_inner();
    let normal = axis * (box2.center() - box1.center()).dot(&axis).sign();

    let edge1 = *box1.semi_axis(axis1);
    let edge2 = *box2.semi_axis(axis2);
    let support1 = box1.local_support_offset(&normal);
    let support2 = -box2.local_support_offset(&normal);
    let origin1 = box1.local_to_world_point(&support1.into());
    let origin2 = box2.local_to_world_point(&support2.into());

    let pt2 = edge_edge_contact_point(&origin1, &edge1, &origin2, &edge2, &normal);
    let pt1 = pt2 + normal * depth;

    IntersectionResult {
        intersects: true,
        is_face_contact: false,
        feature: best.feature,
        normal: Unit::new_unchecked(normal),
        depth,
        local_point1: box1.world_to_local_point(&pt1),
        local_point2: box2.world_to_local_point(&pt2),
        edge_dir1: edge1,
        edge_dir2: edge2,
        local_support1: support1,
        local_support2: support2,
    }
}

/// Intersects the line `origin2 + t * edge2` with the plane through `origin1` that
/// contains both `edge1` and `normal`.
///
/// Returns `origin2` if the line is parallel to the plane.
pub(crate) fn edge_edge_contact_point(
    origin1: &Point<Real>,
    edge1: &Vector<Real>,
    origin2: &Point<Real>,
    edge2: &Vector<Real>,
    normal: &Vector<Real>,
) -> Point<Real> {
    let plane_normal = edge1.cross(normal);
    let denom = plane_normal.dot(edge2);

    if denom == 0.0 {
        *origin2
    } else {
        origin2 + edge2 * (plane_normal.dot(&(origin1 - origin2)) / denom)
    }
}

/// Moves `pt` along the direction of `edge_dir` to the middle of the overlap of the
/// projections of both boxes on that direction.
///
/// The coordinates of `pt` orthogonal to `edge_dir` are left unchanged. `edge_dir` must
/// not be zero.
pub fn fix_degenerate_support_point(
    pt: &Point<Real>,
    edge_dir: &Vector<Real>,
    box1: &RigidBox,
    box2: &RigidBox,
) -> Point<Real> {
    let dir = edge_dir.normalize();
    let (bottom1, top1) = box1.project_on_axis(&dir);
    let (bottom2, top2) = box2.project_on_axis(&dir);
    let middle = (bottom1.max(bottom2) + top1.min(top2)) * 0.5;

    log::debug!(
        "Degenerate support point {:?} moved along {:?} to the overlap middle {}",
        pt,
        dir,
        middle
    );

    pt - dir * dir.dot(&pt.coords) + dir * middle
}
