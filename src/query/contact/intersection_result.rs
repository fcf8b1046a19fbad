use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::sat::{BoxAxisFeature, BoxBoxAxis};
use crate::shape::RigidBox;

/// Geometric description of the intersection between two boxes.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntersectionResult {
    /// Do the boxes intersect?
    pub intersects: bool,

    /// Is this a face-face contact (`true`) or an edge-edge contact (`false`)?
    ///
    /// If the boxes don't intersect, this tells if the separating axis found is a face
    /// normal or the cross product of two edge directions.
    pub is_face_contact: bool,

    /// The features of the boxes that generated `normal`.
    pub feature: BoxAxisFeature,

    /// The contact normal.
    ///
    /// For a face contact it points from the reference box (the one owning the face)
    /// toward the incident box. For an edge contact it points from the first box toward
    /// the second box. If the boxes don't intersect, this is the separating axis found,
    /// with an arbitrary orientation.
    pub normal: UnitVector<Real>,

    /// The penetration depth along `normal`.
    ///
    /// If the boxes don't intersect, this is negative: its opposite is the separation
    /// along the separating axis found (which isn't necessarily the distance between
    /// the boxes).
    pub depth: Real,

    /// The contact point on the first box, expressed in its local-space.
    pub local_point1: Point<Real>,

    /// The contact point on the second box, expressed in its local-space.
    pub local_point2: Point<Real>,

    /// For an edge contact, the world-space semi-axis of the first box parallel to the
    /// contact edge. For a face contact, the world-space center of the reference box.
    pub edge_dir1: Vector<Real>,

    /// For an edge contact, the world-space semi-axis of the second box parallel to the
    /// contact edge. Zero for a face contact.
    pub edge_dir2: Vector<Real>,

    /// For an edge contact, the local coordinates of the vertex of the first box used
    /// to locate its contact edge. Zero otherwise.
    pub local_support1: Vector<Real>,

    /// For an edge contact, the local coordinates of the vertex of the second box used
    /// to locate its contact edge. Zero otherwise.
    pub local_support2: Vector<Real>,
}

impl IntersectionResult {
    /// Creates the result of a query that found the separating axis `sep`.
    pub fn separated(box1: &RigidBox, box2: &RigidBox, sep: &BoxBoxAxis) -> Self {
        let (edge_dir1, edge_dir2) = match sep.feature {
            BoxAxisFeature::Face { .. } => (Vector::zeros(), Vector::zeros()),
            BoxAxisFeature::Edge { axis1, axis2 } => {
                (*box1.semi_axis(axis1), *box2.semi_axis(axis2))
            }
        };

        IntersectionResult {
            intersects: false,
            is_face_contact: sep.feature.is_face(),
            feature: sep.feature,
            normal: sep.axis,
            depth: -sep.separation,
            local_point1: Point::origin(),
            local_point2: Point::origin(),
            edge_dir1,
            edge_dir2,
            local_support1: Vector::zeros(),
            local_support2: Vector::zeros(),
        }
    }

    /// The contact point on the first box, in world-space.
    #[inline]
    pub fn world_point1(&self, box1: &RigidBox) -> Point<Real> {
        box1.local_to_world_point(&self.local_point1)
    }

    /// The contact point on the second box, in world-space.
    #[inline]
    pub fn world_point2(&self, box2: &RigidBox) -> Point<Real> {
        box2.local_to_world_point(&self.local_point2)
    }
}
