use crate::math::Real;

/// Squared length under which the cross product of two unit face normals is
/// treated as zero: the two edge directions are parallel and yield no axis.
pub(crate) const PARALLEL_AXES_EPSILON: Real = 1.0e-10;
/// Maximum distance between the norm of a quaternion and 1 for it to be
/// accepted as a rotation by [`RigidBox::try_new`](crate::shape::RigidBox::try_new).
pub(crate) const ORIENTATION_NORM_EPSILON: Real = 1.0e-4;
