use crate::math::{Real, UnitVector, Vector, DIM};
use crate::shape::RigidBox;
use crate::utils::PARALLEL_AXES_EPSILON;
use arrayvec::ArrayVec;
use na::Unit;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// The maximum number of candidate separating axes between two boxes: 3 + 3 face
/// normals and 3 × 3 edge cross products.
pub const BOX_BOX_MAX_CANDIDATE_AXES: usize = 15;

/// The features of two boxes that generated a candidate separating axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoxAxisFeature {
    /// The axis is the normal of a face of one of the boxes.
    Face {
        /// `true` if the face belongs to the first box. The box owning the face is
        /// the reference box of the contact, the other one is the incident box.
        reference_is_first: bool,
        /// The index of the semi-axis of the reference box orthogonal to the face.
        axis: usize,
    },
    /// The axis is orthogonal to one edge direction of each box.
    Edge {
        /// The index of the semi-axis of the first box the edge is parallel to.
        axis1: usize,
        /// The index of the semi-axis of the second box the edge is parallel to.
        axis2: usize,
    },
}

impl BoxAxisFeature {
    /// Is this axis a face normal?
    #[inline]
    pub fn is_face(&self) -> bool {
        matches!(self, BoxAxisFeature::Face { .. })
    }
}

/// A candidate separating axis and the separation of two boxes along it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxBoxAxis {
    /// The axis direction, as enumerated (it is not oriented from one box to the other).
    pub axis: UnitVector<Real>,
    /// The separation along `axis`: positive if the boxes are disjoint along this axis,
    /// the opposite of the penetration depth otherwise.
    pub separation: Real,
    /// The features that generated this axis.
    pub feature: BoxAxisFeature,
}

/// The result of the separating axis test between two boxes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoxBoxSat {
    /// The first candidate axis found to separate the boxes.
    Separated(BoxBoxAxis),
    /// No candidate separates the boxes: this is the axis with the smallest penetration.
    Penetrating(BoxBoxAxis),
}

/// Computes the separation between two boxes along the given unit axis.
///
/// This is the distance between the projections of both box centers on `axis`, minus
/// the projected radii of both boxes:
/// - **Positive**: the boxes are disjoint along `axis`, which is then a separating axis.
/// - **Negative or zero**: the projections overlap, and the penetration depth along
///   `axis` is the absolute value.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use nalgebra::{Point3, UnitQuaternion, Vector3};
/// use obbsat3d::query::sat::box_box_separation_wrt_axis;
/// use obbsat3d::shape::RigidBox;
///
/// let box1 = RigidBox::new(Point3::origin(), Vector3::repeat(1.0), UnitQuaternion::identity());
/// let box2 = RigidBox::new(Point3::new(3.0, 0.0, 0.0), Vector3::repeat(1.0), UnitQuaternion::identity());
///
/// // 3.0 between the centers, minus 1.0 for each box.
/// assert_eq!(box_box_separation_wrt_axis(&box1, &box2, &Vector3::x()), 1.0);
/// # }
/// ```
pub fn box_box_separation_wrt_axis(box1: &RigidBox, box2: &RigidBox, axis: &Vector<Real>) -> Real {
    let dcenter = box1.center() - box2.center();
    let mut separation = axis.dot(&dcenter).abs();

    for k in 0..DIM {
        separation -= axis.dot(&box1.semi_axes()[k]).abs();
        separation -= axis.dot(&box2.semi_axes()[k]).abs();
    }

    separation
}

/// Lists the candidate separating axes between two boxes, in test order.
///
/// The order is: the three face normals of `box1`, the three face normals of `box2`,
/// then the cross products between the `i`-th axis of `box1` and the `j`-th axis of
/// `box2` for `i` then `j` in `0..3`. Cross products of parallel axes have no
/// direction and are skipped, so fewer than 15 axes may be returned.
pub fn box_box_candidate_axes(
    box1: &RigidBox,
    box2: &RigidBox,
) -> ArrayVec<(UnitVector<Real>, BoxAxisFeature), BOX_BOX_MAX_CANDIDATE_AXES> {
    let normals1: [UnitVector<Real>; DIM] = core::array::from_fn(|i| box1.face_normal(i));
    let normals2: [UnitVector<Real>; DIM] = core::array::from_fn(|i| box2.face_normal(i));
    let mut axes = ArrayVec::new();

    for (axis, normal) in normals1.iter().enumerate() {
        axes.push((
            *normal,
            BoxAxisFeature::Face {
                reference_is_first: true,
                axis,
            },
        ));
    }

    for (axis, normal) in normals2.iter().enumerate() {
        axes.push((
            *normal,
            BoxAxisFeature::Face {
                reference_is_first: false,
                axis,
            },
        ));
    }

    for (axis1, normal1) in normals1.iter().enumerate() {
        for (axis2, normal2) in normals2.iter().enumerate() {
            let cross = normal1.cross(&normal2.into_inner());

            if cross.norm_squared() > PARALLEL_AXES_EPSILON {
                axes.push((
                    Unit::new_normalize(cross),
                    BoxAxisFeature::Edge { axis1, axis2 },
                ));
            }
        }
    }

    axes
}

/// Finds a separating axis between two boxes or, if there is none, the axis of least
/// penetration.
///
/// The candidates of [`box_box_candidate_axes`] are tested in order:
/// - the first axis with a positive separation is returned immediately as
///   [`BoxBoxSat::Separated`];
/// - otherwise the axis with the largest (least negative) separation is returned as
///   [`BoxBoxSat::Penetrating`]. On ties the earliest axis wins, so the result only
///   depends on the input boxes.
pub fn box_box_find_best_axis(box1: &RigidBox, box2: &RigidBox) -> BoxBoxSat {
    let mut best = BoxBoxAxis {
        axis: Vector::x_axis(),
        separation: -Real::INFINITY,
        feature: BoxAxisFeature::Face {
            reference_is_first: true,
            axis: 0,
        },
    };

    for (axis, feature) in box_box_candidate_axes(box1, box2) {
        let separation = box_box_separation_wrt_axis(box1, box2, &axis);
        let candidate = BoxBoxAxis {
            axis,
            separation,
            feature,
        };

        if separation > 0.0 {
            return BoxBoxSat::Separated(candidate);
        }

        if separation > best.separation {
            best = candidate;
        }
    }

    BoxBoxSat::Penetrating(best)
}
