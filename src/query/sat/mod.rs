//! Separating Axis Theorem (SAT) tests.
//!
//! Two convex shapes are disjoint if and only if there is an axis on which their projections
//! do not overlap. For polyhedra, only a finite set of axes needs to be checked: the face
//! normals of both shapes and, in 3D, the cross products of one edge direction of each shape.
//!
//! Projecting both shapes on a candidate axis gives two intervals. The gap between them is
//! the *separation* along that axis:
//!
//! - if it is positive on one axis, the shapes do not intersect and the search can stop;
//! - if it is negative or zero on every axis, the shapes intersect, and the axis with the
//!   largest separation (the smallest penetration) approximates the contact normal, its
//!   opposite being the penetration depth.
//!
//! # Boxes
//!
//! Two boxes have 15 candidate axes: the 3 face normals of each box, and the 9 cross products
//! between one edge direction of each box. Cross products of parallel edges are skipped.
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use nalgebra::{Point3, UnitQuaternion, Vector3};
//! use obbsat3d::query::sat::{box_box_find_best_axis, BoxBoxSat};
//! use obbsat3d::shape::RigidBox;
//!
//! let box1 = RigidBox::new(Point3::origin(), Vector3::repeat(1.0), UnitQuaternion::identity());
//! let box2 = RigidBox::new(Point3::new(1.5, 0.0, 0.0), Vector3::repeat(0.5), UnitQuaternion::identity());
//!
//! match box_box_find_best_axis(&box1, &box2) {
//!     BoxBoxSat::Separated(sep) => println!("Boxes are separated by {}", sep.separation),
//!     BoxBoxSat::Penetrating(best) => println!("Boxes are overlapping by {}", -best.separation),
//! }
//! # }
//! ```

pub use self::sat_box_box::*;

mod sat_box_box;
