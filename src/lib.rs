/*!
obbsat3d
========

**obbsat3d** computes whether two oriented boxes intersect in 3D and, when they
do, reconstructs one contact: a normal, the kind of contact (face-face or
edge-edge) and a pair of witness points expressed in the local frame of each
box.

```
# #[cfg(feature = "f32")] {
use nalgebra::{Point3, UnitQuaternion, Vector3};
use obbsat3d::query;
use obbsat3d::shape::RigidBox;

let box1 = RigidBox::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0), UnitQuaternion::identity());
let box2 = RigidBox::new(Point3::new(1.5, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), UnitQuaternion::identity());

let res = query::test_intersection(&box1, &box2);
assert!(res.intersects);
assert!(res.is_face_contact);
assert!((res.depth - 0.5).abs() < 1.0e-6);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Quaternion, Translation3, UnitQuaternion, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
