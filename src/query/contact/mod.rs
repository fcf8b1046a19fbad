//! Implementation details of the [`test_intersection`](crate::query::test_intersection) function.

pub use self::contact_box_box::{
    contact_box_box, contact_box_box_edge, contact_box_box_face, fix_degenerate_support_point,
};
pub use self::intersection_result::IntersectionResult;

mod contact_box_box;
mod intersection_result;
