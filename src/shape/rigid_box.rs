//! Oriented box shape.

use crate::math::{Isometry, Point, Quaternion, Real, Rotation, Translation, UnitVector, Vector, DIM};
use crate::utils::{self, WSign, ORIENTATION_NORM_EPSILON};
use na::Unit;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Indicates that the data given to [`RigidBox::try_new`] do not describe a valid box.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum RigidBoxError {
    /// The center, the half-extents or the orientation contain a NaN or an infinity.
    #[error("the box center, half-extents or orientation is not finite.")]
    NonFinite,
    /// A half-extent is zero or negative.
    #[error("the half-extent {value} along the local axis {axis} is not strictly positive.")]
    InvalidHalfExtent {
        /// The local axis with the invalid half-extent.
        axis: usize,
        /// The rejected half-extent.
        value: Real,
    },
    /// The orientation quaternion is too far from unit length to be a rotation.
    #[error("the orientation quaternion has a norm of {0} instead of 1.")]
    NonUnitOrientation(Real),
}

/// A box with arbitrary position, orientation and extents.
///
/// The world-space semi-axes (the half-extents rotated by the orientation) are computed
/// once at construction. There is no way to mutate a box in-place, so they always stay
/// consistent with the orientation and the half-extents: build a new box instead.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(from = "RigidBoxParts", into = "RigidBoxParts")
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct RigidBox {
    center: Point<Real>,
    half_extents: Vector<Real>,
    orientation: Rotation<Real>,
    semi_axes: [Vector<Real>; DIM],
}

/// The serialized form of a box: the semi-axes are derived data.
#[cfg(feature = "serde-serialize")]
#[derive(Serialize, Deserialize)]
struct RigidBoxParts {
    center: Point<Real>,
    half_extents: Vector<Real>,
    orientation: Rotation<Real>,
}

#[cfg(feature = "serde-serialize")]
impl From<RigidBoxParts> for RigidBox {
    fn from(parts: RigidBoxParts) -> Self {
        RigidBox::new(parts.center, parts.half_extents, parts.orientation)
    }
}

#[cfg(feature = "serde-serialize")]
impl From<RigidBox> for RigidBoxParts {
    fn from(b: RigidBox) -> Self {
        RigidBoxParts {
            center: b.center,
            half_extents: b.half_extents,
            orientation: b.orientation,
        }
    }
}

impl RigidBox {
    /// Creates a new box from its center, its half-extents along each local axis, and
    /// the rotation mapping its local axes to world axes.
    ///
    /// Half-extents must be positive. This is not checked: use [`RigidBox::try_new`] to
    /// validate untrusted data.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, orientation: Rotation<Real>) -> Self {
        let semi_axes = core::array::from_fn(|i| {
            orientation * utils::scale(&half_extents, &Vector::ith(i, 1.0))
        });

        RigidBox {
            center,
            half_extents,
            orientation,
            semi_axes,
        }
    }

    /// Creates a new box with the given rigid position and half-extents.
    #[inline]
    pub fn from_isometry(pos: &Isometry<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(pos.translation.vector.into(), half_extents, pos.rotation)
    }

    /// Creates a new box after checking that its description is valid.
    ///
    /// All components must be finite, every half-extent must be strictly positive,
    /// and `orientation` must have a norm close to 1 (it is renormalized).
    pub fn try_new(
        center: Point<Real>,
        half_extents: Vector<Real>,
        orientation: Quaternion<Real>,
    ) -> Result<Self, RigidBoxError> {
        let all_finite = center.coords.iter().all(|e| e.is_finite())
            && half_extents.iter().all(|e| e.is_finite())
            && orientation.coords.iter().all(|e| e.is_finite());

        if !all_finite {
            return Err(RigidBoxError::NonFinite);
        }

        for (axis, value) in half_extents.iter().copied().enumerate() {
            if value <= 0.0 {
                return Err(RigidBoxError::InvalidHalfExtent { axis, value });
            }
        }

        let norm = orientation.norm();
        if !relative_eq!(norm, 1.0, epsilon = ORIENTATION_NORM_EPSILON) {
            return Err(RigidBoxError::NonUnitOrientation(norm));
        }

        Ok(Self::new(
            center,
            half_extents,
            Unit::new_normalize(orientation),
        ))
    }

    /// The center of this box, in world-space.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The half-extents of this box along each of its local axes.
    #[inline]
    pub fn half_extents(&self) -> &Vector<Real> {
        &self.half_extents
    }

    /// The rotation mapping the local axes of this box to world axes.
    #[inline]
    pub fn orientation(&self) -> &Rotation<Real> {
        &self.orientation
    }

    /// The three world-space semi-axes of this box.
    #[inline]
    pub fn semi_axes(&self) -> &[Vector<Real>; DIM] {
        &self.semi_axes
    }

    /// The `i`-th world-space semi-axis of this box.
    #[inline]
    pub fn semi_axis(&self, i: usize) -> &Vector<Real> {
        &self.semi_axes[i]
    }

    /// The rigid position of this box.
    #[inline]
    pub fn position(&self) -> Isometry<Real> {
        Isometry::from_parts(Translation::from(self.center.coords), self.orientation)
    }

    /// The normal of the face pointing toward the `i`-th positive semi-axis.
    ///
    /// The corresponding half-extent must not be zero.
    #[inline]
    pub fn face_normal(&self, i: usize) -> UnitVector<Real> {
        Unit::new_normalize(self.semi_axes[i])
    }

    /// The world-space direction of the `i`-th local axis.
    ///
    /// Unlike [`Self::face_normal`], this is well-defined for flat boxes.
    #[inline]
    pub fn local_axis(&self, i: usize) -> UnitVector<Real> {
        self.orientation * Vector::ith_axis(i)
    }

    /// Half the length of the projection of this box on `axis`.
    #[inline]
    pub fn projected_radius(&self, axis: &Vector<Real>) -> Real {
        self.semi_axes.iter().map(|a| axis.dot(a).abs()).sum()
    }

    /// The interval `[min, max]` covered by the projection of this box on `axis`.
    #[inline]
    pub fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        let middle = axis.dot(&self.center.coords);
        let radius = self.projected_radius(axis);
        (middle - radius, middle + radius)
    }

    /// The local coordinates of the vertex of this box furthest along `dir`.
    ///
    /// Each coordinate is `±half_extent`, with the sign of the dot product between `dir`
    /// and the matching semi-axis. An exactly zero dot product selects the positive side.
    #[inline]
    pub fn local_support_offset(&self, dir: &Vector<Real>) -> Vector<Real> {
        let dots = Vector::from_fn(|k, _| dir.dot(&self.semi_axes[k]));
        utils::scale(&dots.sign(), &self.half_extents)
    }

    /// The world-space vertex of this box furthest along `dir`.
    #[inline]
    pub fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_to_world_point(&self.local_support_offset(dir).into())
    }

    /// Transforms a point from the local frame of this box to world-space.
    #[inline]
    pub fn local_to_world_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.center + self.orientation * pt.coords
    }

    /// Transforms a world-space point to the local frame of this box.
    #[inline]
    pub fn world_to_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        (utils::conjugate(&self.orientation) * (pt - self.center)).into()
    }

    /// The eight world-space vertices of this box.
    ///
    /// The `i`-th bit of the vertex index is set iff. its `i`-th local coordinate is negative.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        core::array::from_fn(|id| {
            let local = Vector::from_fn(|i, _| {
                if id & (1 << i) != 0 {
                    -self.half_extents[i]
                } else {
                    self.half_extents[i]
                }
            });
            self.local_to_world_point(&local.into())
        })
    }

    /// Tests if a point given in the local frame of this box lies inside of this box
    /// enlarged by `margin` along each axis.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>, margin: Real) -> bool {
        (0..DIM).all(|i| pt[i].abs() <= self.half_extents[i] + margin)
    }
}
