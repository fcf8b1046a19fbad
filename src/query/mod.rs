//! Non-persistent geometric queries between boxes.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::test_intersection()`](test_intersection) to determine if two boxes intersect
//!   and compute one contact between them, including its penetration depth.
//! * [`query::intersection_test_box_box()`](intersection_test_box_box) to only determine if two
//!   boxes intersect.
//! * [`query::debug_lines()`](debug_lines) to turn the result of an intersection query into
//!   colored segments for visual debugging.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the building blocks of the queries
//! above: the contact reconstruction for each kind of contact, and the handling of degenerate
//! support points. The separating axis test itself is exposed by the [`sat`] module.

pub use self::contact::IntersectionResult;
#[cfg(feature = "alloc")]
pub use self::debug_lines::{debug_lines, DebugLine};
pub use self::intersection_test::intersection_test_box_box;
pub use self::test_intersection::test_intersection;

pub mod contact;
#[cfg(feature = "alloc")]
mod debug_lines;
pub mod intersection_test;
pub mod sat;
mod test_intersection;

/// Queries dedicated to specific kinds of contacts.
pub mod details {
    pub use super::contact::{
        contact_box_box, contact_box_box_edge, contact_box_box_face, fix_degenerate_support_point,
    };
    pub use super::intersection_test::*;
}
