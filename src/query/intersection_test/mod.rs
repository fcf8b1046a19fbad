//! Implementation details of the boolean intersection test.

pub use self::intersection_test_box_box::intersection_test_box_box;

mod intersection_test_box_box;
