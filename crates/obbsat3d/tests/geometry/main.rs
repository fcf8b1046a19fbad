#[macro_use]
extern crate approx;
extern crate nalgebra as na;

#[cfg(feature = "alloc")]
mod box_box_debug_lines;
mod box_box_degenerate;
mod box_box_edge_contact;
